//! Record, trace and outcome types.
//!
//! # Examples
//!
//! ```
//! use error_trace::{ErrorTrace, GenericError, ErrorKind};
//!
//! let mut err = ErrorTrace::new();
//! err.append(GenericError::record("disk full"), "writer.rs", 88);
//!
//! assert!(err.has_kind(GenericError::id()));
//! println!("{}", err);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod outcome;
pub mod record;
pub mod trace;

pub use outcome::{AccessError, Outcome, OutcomeIsSuccessError};
pub use record::{ErrorRecord, LocatedErrorRecord, UNKNOWN_FILE, UNKNOWN_LINE};
pub use trace::ErrorTrace;

/// SmallVec-backed storage for a trace's entries.
///
/// Uses inline storage for up to 2 entries, so the short traces produced by a
/// single failing call avoid heap allocation.
pub type TraceVec = SmallVec<[LocatedErrorRecord; 2]>;
