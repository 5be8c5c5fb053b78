//! Error propagation with hashed kinds, ordered traces and a
//! success-or-error container.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_trace::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Recording errors on a trace
//!
//! ```
//! use error_trace::{err_add, ErrorTrace};
//!
//! let mut err = ErrorTrace::new();
//! err_add!(err, "Failed to open the database.");
//!
//! assert!(err.has_errors());
//! assert!(err.last().message().contains("database"));
//! ```
//!
//! ## Declaring a kind and checking for it
//!
//! ```
//! use error_trace::{err_add, error_kind, ErrorTrace};
//!
//! error_kind!(pub ParseError in parser);
//!
//! let mut err = ErrorTrace::new();
//! err_add!(err, "Unexpected token.", ParseError);
//!
//! assert!(err.is::<ParseError>());
//! ```
//!
//! ## Returning an `Outcome`
//!
//! ```
//! use error_trace::{err_outcome, Outcome};
//!
//! fn parse(input: &str) -> Outcome<i32> {
//!     match input.parse::<i32>() {
//!         Ok(value) => Outcome::success(value),
//!         Err(_) => err_outcome!("Invalid number."),
//!     }
//! }
//!
//! assert_eq!(*parse("42").value(), 42);
//! assert!(parse("x").has_error());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between [`Outcome`], `Result` and the record types
pub mod convert;
/// Kind declaration and error-recording macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Error-kind identity: the hash function and the [`ErrorKind`] trait
pub mod traits;
/// Record, trace and outcome types
pub mod types;

pub use convert::*;
pub use traits::{kind_id, ErrorKind, GenericError};
pub use types::{
    AccessError, ErrorRecord, ErrorTrace, LocatedErrorRecord, Outcome, OutcomeIsSuccessError,
    TraceVec, UNKNOWN_FILE, UNKNOWN_LINE,
};
