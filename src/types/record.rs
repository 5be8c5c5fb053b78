//! Immutable error records, with and without an origin location.

use core::fmt;
use core::ops::Deref;

use crate::traits::{ErrorKind, GenericError};
use crate::types::alloc_type::String;

/// File name stamped on entries recorded without an origin location.
pub const UNKNOWN_FILE: &str = "Unknown file";

/// Line number stamped on entries recorded without an origin location.
pub const UNKNOWN_LINE: i32 = -1;

/// An immutable value describing one recorded error: the kind's hashed id,
/// the names the kind was declared with, and a free-text message.
///
/// A default-constructed record carries the [`GenericError`] kind and an
/// empty message. Records are plain values; once built they are never
/// mutated, only copied into traces.
///
/// # Examples
///
/// ```
/// use error_trace::{ErrorRecord, GenericError};
///
/// let record = ErrorRecord::from("out of range");
/// assert!(record.is::<GenericError>());
/// assert_eq!(record.message(), "out of range");
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorRecord {
    kind_id: i32,
    namespace_name: String,
    type_name: String,
    message: String,
}

impl ErrorRecord {
    /// Creates a record stamped with an explicit kind id and names.
    ///
    /// Callers normally go through a kind's factories
    /// ([`default_record`](ErrorKind::default_record) /
    /// [`record`](ErrorKind::record)) instead, which fill the first three
    /// arguments consistently.
    #[inline]
    pub fn new(
        kind_id: i32,
        namespace_name: impl Into<String>,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind_id,
            namespace_name: namespace_name.into(),
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Returns the id of the kind this record was stamped with.
    #[must_use]
    #[inline]
    pub fn kind_id(&self) -> i32 {
        self.kind_id
    }

    /// Returns the namespace the kind was declared in; empty for global kinds.
    #[must_use]
    #[inline]
    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }

    /// Returns the declared type name of the kind.
    #[must_use]
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the message describing the error; may be empty.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Checks whether this record was stamped with kind `K`.
    ///
    /// The comparison is by hashed id, so it inherits the collision caveat of
    /// [`kind_id`](crate::kind_id): a match is near-certain but not absolute.
    #[must_use]
    #[inline]
    pub fn is<K: ErrorKind>(&self) -> bool {
        K::ID == self.kind_id
    }
}

impl Default for ErrorRecord {
    fn default() -> Self {
        GenericError::default_record()
    }
}

impl From<&str> for ErrorRecord {
    /// A bare message becomes a [`GenericError`] record.
    fn from(message: &str) -> Self {
        GenericError::record(message)
    }
}

impl From<String> for ErrorRecord {
    fn from(message: String) -> Self {
        GenericError::record(message)
    }
}

/// An [`ErrorRecord`] tagged with the file and line it was recorded at.
///
/// Entries recorded without a location carry the [`UNKNOWN_FILE`] /
/// [`UNKNOWN_LINE`] sentinels. The wrapped record is reachable through
/// `Deref`, so `entry.message()` and friends work directly.
///
/// Its `Display` output is the per-entry tail of the stack-trace format:
/// the kind's name, the namespace segment when one exists, the id, the
/// origin line and the message line when the message is non-empty.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocatedErrorRecord {
    record: ErrorRecord,
    file_name: String,
    line: i32,
}

impl LocatedErrorRecord {
    /// Creates an entry from a record and its origin location.
    #[inline]
    pub fn new(record: impl Into<ErrorRecord>, file_name: impl Into<String>, line: i32) -> Self {
        Self {
            record: record.into(),
            file_name: file_name.into(),
            line,
        }
    }

    /// Creates an entry with the sentinel location.
    #[inline]
    pub fn from_record(record: impl Into<ErrorRecord>) -> Self {
        Self::new(record, UNKNOWN_FILE, UNKNOWN_LINE)
    }

    /// Returns the wrapped record.
    #[must_use]
    #[inline]
    pub fn record(&self) -> &ErrorRecord {
        &self.record
    }

    /// Returns the file the error was recorded at, or [`UNKNOWN_FILE`].
    #[must_use]
    #[inline]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the line the error was recorded at, or [`UNKNOWN_LINE`].
    #[must_use]
    #[inline]
    pub fn line(&self) -> i32 {
        self.line
    }
}

impl Deref for LocatedErrorRecord {
    type Target = ErrorRecord;

    fn deref(&self) -> &ErrorRecord {
        &self.record
    }
}

impl From<ErrorRecord> for LocatedErrorRecord {
    fn from(record: ErrorRecord) -> Self {
        Self::from_record(record)
    }
}

impl fmt::Display for LocatedErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.record.type_name())?;
        if !self.record.namespace_name().is_empty() {
            write!(f, " from namespace {}", self.record.namespace_name())?;
        }
        writeln!(f, " (id = {})", self.record.kind_id())?;
        writeln!(f, "=== At {}, on line {}", self.file_name, self.line)?;
        if !self.record.message().is_empty() {
            writeln!(f, "{}", self.record.message())?;
        }
        Ok(())
    }
}
