//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use error_trace::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`error_kind!`], [`err_add!`], [`err_outcome!`]
//! - **Types**: [`ErrorRecord`], [`LocatedErrorRecord`], [`ErrorTrace`],
//!   [`Outcome`], [`AccessError`]
//! - **Traits and kinds**: [`ErrorKind`], [`GenericError`]
//!
//! # Examples
//!
//! ```
//! use error_trace::prelude::*;
//!
//! fn checked_div(a: i32, b: i32) -> Outcome<i32> {
//!     if b == 0 {
//!         err_outcome!("Division by zero.")
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! assert_eq!(*checked_div(6, 3).value(), 2);
//! assert!(checked_div(1, 0).has_error());
//! ```

// Macros
pub use crate::{err_add, err_outcome, error_kind};

// Core types
pub use crate::types::{AccessError, ErrorRecord, ErrorTrace, LocatedErrorRecord, Outcome};

// Traits and built-in kinds
pub use crate::traits::{ErrorKind, GenericError};
