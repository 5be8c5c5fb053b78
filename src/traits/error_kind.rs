//! The kind identity scheme: a compile-time hash of the qualifying name.
//!
//! There is deliberately no registry. A kind's id is a pure function of the
//! namespace and type name it was declared with, so it never changes across
//! builds as long as the names are unchanged, and declaring a kind costs
//! nothing at runtime.

use crate::types::alloc_type::String;
use crate::types::record::ErrorRecord;

/// Computes the 32-bit id of an error kind from its qualifying names.
///
/// The hash iterates the bytes of `namespace` followed by `name`, accumulating
/// `hash = hash * 101 + byte` with unsigned 32-bit wraparound, and casts the
/// result to `i32`. It is a `const fn`, so every id produced by
/// [`error_kind!`](crate::error_kind) is evaluated at compile time.
///
/// # Collisions
///
/// Ids are *not* guaranteed unique: two differently-named kinds may hash to
/// the same id. This is the accepted price of having no registry and no
/// runtime cost. Id equality is therefore approximate; callers that need
/// certainty should also compare
/// [`type_name`](crate::ErrorRecord::type_name) and
/// [`namespace_name`](crate::ErrorRecord::namespace_name).
///
/// # Examples
///
/// ```
/// use error_trace::kind_id;
///
/// assert_eq!(kind_id("", "GenericError"), 481049771);
/// assert_ne!(kind_id("parser", "Overflow"), kind_id("lexer", "Overflow"));
/// ```
#[must_use]
pub const fn kind_id(namespace: &str, name: &str) -> i32 {
    let mut hash: u32 = 0;

    let mut bytes = namespace.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(101).wrapping_add(bytes[i] as u32);
        i += 1;
    }

    bytes = name.as_bytes();
    i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(101).wrapping_add(bytes[i] as u32);
        i += 1;
    }

    hash as i32
}

/// A named category of error with a process-stable integer id.
///
/// Implementors are normally declared with the
/// [`error_kind!`](crate::error_kind) macro, which stamps the qualifying
/// names and the hashed [`ID`](ErrorKind::ID) and leaves the record
/// factories to the default methods below.
///
/// # Examples
///
/// ```
/// use error_trace::{error_kind, ErrorKind};
///
/// error_kind!(pub MissingField in config);
///
/// let empty = MissingField::default_record();
/// assert!(empty.message().is_empty());
///
/// let described = MissingField::record("no `port` key");
/// assert_eq!(described.kind_id(), MissingField::id());
/// ```
pub trait ErrorKind {
    /// Namespace segment of the qualifying name; empty for global kinds.
    const NAMESPACE: &'static str;

    /// Declared type name of the kind.
    const NAME: &'static str;

    /// Hashed identity, `kind_id(NAMESPACE, NAME)`. See [`kind_id`] for the
    /// collision trade-off.
    const ID: i32;

    /// Returns the id representing this kind.
    #[must_use]
    fn id() -> i32 {
        Self::ID
    }

    /// Returns a record of this kind with an empty message.
    fn default_record() -> ErrorRecord {
        ErrorRecord::new(Self::ID, Self::NAMESPACE, Self::NAME, "")
    }

    /// Returns a record of this kind carrying `message`.
    fn record(message: impl Into<String>) -> ErrorRecord {
        ErrorRecord::new(Self::ID, Self::NAMESPACE, Self::NAME, message)
    }
}

crate::error_kind! {
    /// Built-in kind for errors recorded without a dedicated kind.
    pub GenericError
}
