//! Conversions between [`Outcome`] and the standard `Result`.
//!
//! An `Outcome<T>` and a `Result<T, ErrorTrace>` carry the same information;
//! these adapters move between the two without touching either payload, so
//! code that prefers `?`-style propagation can drop into `Result` at any
//! boundary and come back.

use crate::types::outcome::Outcome;
use crate::types::trace::ErrorTrace;

impl<T> From<Result<T, ErrorTrace>> for Outcome<T> {
    fn from(result: Result<T, ErrorTrace>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(trace) => Outcome::failure(trace),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorTrace> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

impl<T> From<ErrorTrace> for Outcome<T> {
    fn from(trace: ErrorTrace) -> Self {
        Outcome::failure(trace)
    }
}

/// Consumes an outcome into a standard `Result`.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, ErrorTrace> {
    outcome.into_result()
}

/// Wraps a standard `Result` into an outcome.
#[inline]
pub fn result_to_outcome<T>(result: Result<T, ErrorTrace>) -> Outcome<T> {
    result.into()
}
