//! Error-kind identity.
//!
//! A kind is a named category of error with a process-stable 32-bit id,
//! computed from its qualifying name at compile time. The [`ErrorKind`] trait
//! is the capability set every declared kind carries; [`kind_id`] is the hash
//! behind the ids.
//!
//! # Examples
//!
//! ```
//! use error_trace::{error_kind, ErrorKind};
//!
//! error_kind!(pub TimeoutError in net);
//!
//! let record = TimeoutError::record("Connection timed out.");
//! assert_eq!(record.kind_id(), TimeoutError::id());
//! assert_eq!(record.type_name(), "TimeoutError");
//! ```

pub mod error_kind;

pub use error_kind::{kind_id, ErrorKind, GenericError};
