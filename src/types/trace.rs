//! The ordered error stack and its rendering.

use core::fmt::{self, Write as _};
use core::ops::AddAssign;

use crate::traits::ErrorKind;
use crate::types::alloc_type::String;
use crate::types::record::{ErrorRecord, LocatedErrorRecord};
use crate::types::TraceVec;

/// An ordered, appendable sequence of [`LocatedErrorRecord`].
///
/// Entry order is significant: index 0 is the first recorded error, later
/// entries are the "then" steps of the story. Entries are never reordered or
/// deduplicated; a trace only grows at the end, is cleared wholesale, or is
/// extended by concatenating another trace.
///
/// A trace is an unsynchronized owned value. The borrow rules already
/// enforce the single-writer contract; nothing here locks.
///
/// # Examples
///
/// ```
/// use error_trace::ErrorTrace;
///
/// let mut err = ErrorTrace::new();
/// assert!(!err.has_errors());
///
/// err.append("Failed to do something.", "job.rs", 7);
/// assert_eq!(err.last().message(), "Failed to do something.");
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct ErrorTrace {
    entries: TraceVec,
    sink: bool,
}

impl ErrorTrace {
    /// Creates an empty trace.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: TraceVec::new(),
            sink: false,
        }
    }

    /// Returns the trace that discards every append.
    ///
    /// Pass a sink to callees whose errors you do not care about: appends and
    /// concatenations into it are silently dropped and it always reads as
    /// empty, so it is harmless to share from any number of call sites.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::{err_add, ErrorTrace};
    ///
    /// let mut ignored = ErrorTrace::sink();
    /// err_add!(ignored, "nobody is listening");
    ///
    /// assert!(ignored.is_empty());
    /// assert_eq!(ignored.render(), "No errors to show.");
    /// ```
    #[inline]
    pub fn sink() -> Self {
        Self {
            entries: TraceVec::new(),
            sink: true,
        }
    }

    /// Creates a one-entry trace with an explicit origin location.
    pub fn from_entry(
        record: impl Into<ErrorRecord>,
        file_name: impl Into<String>,
        line: i32,
    ) -> Self {
        let mut trace = Self::new();
        trace.append(record, file_name, line);
        trace
    }

    /// Returns `true` for the discard-all trace created by [`sink`](Self::sink).
    #[must_use]
    #[inline]
    pub fn is_sink(&self) -> bool {
        self.sink
    }

    /// Returns `true` iff the trace holds no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if one or more errors were recorded.
    ///
    /// This is the "did anything fail" check; use it before [`last`](Self::last).
    #[must_use]
    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[LocatedErrorRecord] {
        &self.entries
    }

    /// Returns an iterator over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, LocatedErrorRecord> {
        self.entries.iter()
    }

    /// Returns the most recently appended entry.
    ///
    /// # Panics
    ///
    /// Panics if the trace is empty. Calling `last` without checking
    /// [`has_errors`](Self::has_errors) first is a programming error, not a
    /// recoverable condition.
    #[must_use]
    pub fn last(&self) -> &LocatedErrorRecord {
        match self.entries.last() {
            Some(entry) => entry,
            None => panic!("ErrorTrace::last called on an empty trace"),
        }
    }

    /// Appends an entry built from `record` and its origin location.
    ///
    /// `record` may be a pre-built [`ErrorRecord`] or a bare message, which
    /// is stamped with the generic kind. On the [`sink`](Self::sink) this is
    /// a no-op.
    ///
    /// The [`err_add!`](crate::err_add) macro forwards here with the calling
    /// file and line filled in.
    pub fn append(
        &mut self,
        record: impl Into<ErrorRecord>,
        file_name: impl Into<String>,
        line: i32,
    ) {
        if self.sink {
            return;
        }
        self.record_entry(LocatedErrorRecord::new(record, file_name, line));
    }

    /// Appends an entry with the sentinel location.
    pub fn push(&mut self, record: impl Into<ErrorRecord>) {
        if self.sink {
            return;
        }
        self.record_entry(LocatedErrorRecord::from_record(record));
    }

    fn record_entry(&mut self, entry: LocatedErrorRecord) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            kind_id = entry.kind_id(),
            file = entry.file_name(),
            line = entry.line(),
            "error recorded: {}",
            entry.message()
        );
        self.entries.push(entry);
    }

    /// Appends all of `other`'s entries, in their existing order, after this
    /// trace's current entries.
    ///
    /// `other` is left untouched. On the [`sink`](Self::sink) this is a no-op.
    /// The `+=` operator is sugar for this method.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::ErrorTrace;
    ///
    /// fn step(index: i32) -> ErrorTrace {
    ///     ErrorTrace::from_entry(format!("step {index} failed"), "steps.rs", 4)
    /// }
    ///
    /// let mut err = ErrorTrace::new();
    /// err += &step(0);
    /// err += step(1);
    ///
    /// assert_eq!(err.len(), 2);
    /// assert!(err.last().message().contains("step 1"));
    /// ```
    pub fn concatenate(&mut self, other: &ErrorTrace) {
        if self.sink {
            return;
        }
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Removes every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Checks whether the **last** entry was stamped with `kind_id`.
    ///
    /// Returns `false` on an empty trace. Only the most recent entry is
    /// consulted; earlier entries do not count.
    #[must_use]
    pub fn has_kind(&self, kind_id: i32) -> bool {
        match self.entries.last() {
            Some(entry) => entry.kind_id() == kind_id,
            None => false,
        }
    }

    /// Checks whether the last entry was stamped with kind `K`.
    ///
    /// Typed variant of [`has_kind`](Self::has_kind); same empty-trace and
    /// collision caveats.
    #[must_use]
    #[inline]
    pub fn is<K: ErrorKind>(&self) -> bool {
        self.has_kind(K::ID)
    }

    /// Renders the trace as the human-readable stack-trace text.
    ///
    /// An empty trace renders as `"No errors to show."`. Otherwise the text
    /// is a header with the entry count, one block per entry in insertion
    /// order, and a footer. Rendering is the only place this crate formats
    /// anything; nothing is allocated until a caller asks for the text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "{}", self);
        out
    }
}

impl PartialEq for ErrorTrace {
    /// Traces compare by entry content; the sink compares equal to any empty
    /// trace, matching what it reads as.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ErrorTrace {}

impl AddAssign<&ErrorTrace> for ErrorTrace {
    fn add_assign(&mut self, other: &ErrorTrace) {
        self.concatenate(other);
    }
}

impl AddAssign<ErrorTrace> for ErrorTrace {
    fn add_assign(&mut self, other: ErrorTrace) {
        if self.sink {
            return;
        }
        self.entries.extend(other.entries);
    }
}

impl Extend<LocatedErrorRecord> for ErrorTrace {
    fn extend<I: IntoIterator<Item = LocatedErrorRecord>>(&mut self, iter: I) {
        if self.sink {
            return;
        }
        self.entries.extend(iter);
    }
}

impl FromIterator<LocatedErrorRecord> for ErrorTrace {
    fn from_iter<I: IntoIterator<Item = LocatedErrorRecord>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
            sink: false,
        }
    }
}

impl IntoIterator for ErrorTrace {
    type Item = LocatedErrorRecord;
    type IntoIter = smallvec::IntoIter<[LocatedErrorRecord; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorTrace {
    type Item = &'a LocatedErrorRecord;
    type IntoIter = core::slice::Iter<'a, LocatedErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<ErrorRecord> for ErrorTrace {
    fn from(record: ErrorRecord) -> Self {
        let mut trace = Self::new();
        trace.push(record);
        trace
    }
}

impl From<&str> for ErrorTrace {
    /// A bare message becomes a one-entry generic-kind trace with the
    /// sentinel location.
    fn from(message: &str) -> Self {
        Self::from(ErrorRecord::from(message))
    }
}

impl fmt::Display for ErrorTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No errors to show.");
        }

        writeln!(f, "=============== STACK TRACE ({})\n", self.entries.len())?;

        for (index, entry) in self.entries.iter().enumerate() {
            if index == 0 {
                write!(f, "=(1)= first -> {}", entry)?;
            } else {
                write!(f, "=({})= Then  -> {}", index + 1, entry)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "=============== {} errors shown", self.entries.len())
    }
}
