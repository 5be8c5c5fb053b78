//! The success-or-error container returned by fallible operations.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::traits::ErrorKind;
use crate::types::alloc_type::String;
use crate::types::record::ErrorRecord;
use crate::types::trace::ErrorTrace;

crate::error_kind! {
    /// Kind stamped on the misuse fault raised when the error branch of a
    /// successful [`Outcome`] is requested.
    pub OutcomeIsSuccessError in error_trace
}

/// Exactly one of a success value or an [`ErrorTrace`].
///
/// An outcome is built through one of the `success*` or `failure*` factories
/// and never changes branch afterwards; converting between branches means
/// constructing a new outcome. Copying replicates whichever branch is live,
/// and dropping releases only that branch; the enum representation carries
/// those guarantees.
///
/// Accessing the wrong branch is a programming error and panics with the
/// rendered trace as the message; the `try_*` accessors return the same
/// information as a typed [`AccessError`] instead.
///
/// # Examples
///
/// ```
/// use error_trace::{ErrorTrace, Outcome};
///
/// fn half(n: i32) -> Outcome<i32> {
///     if n % 2 == 0 {
///         Outcome::success(n / 2)
///     } else {
///         Outcome::failure(ErrorTrace::from_entry("odd input", "math.rs", 3))
///     }
/// }
///
/// assert_eq!(*half(4).value(), 2);
/// assert!(half(3).has_error());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    repr: OutcomeRepr<T>,
}

#[derive(Debug, Clone, PartialEq)]
enum OutcomeRepr<T> {
    Success(T),
    Failure(ErrorTrace),
}

impl<T> Outcome<T> {
    // Branch construction is confined to these two functions; every factory
    // below routes through them.
    fn make_value(value: T) -> Self {
        Self {
            repr: OutcomeRepr::Success(value),
        }
    }

    fn make_error(trace: ErrorTrace) -> Self {
        Self {
            repr: OutcomeRepr::Failure(trace),
        }
    }

    /// Creates a successful outcome holding `value`.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::make_value(value)
    }

    /// Creates a successful outcome from a constructor closure.
    ///
    /// Useful when the value is expensive to build and the call site wants
    /// construction to happen directly in the outcome expression.
    #[inline]
    pub fn success_with(make: impl FnOnce() -> T) -> Self {
        Self::make_value(make())
    }

    /// Creates a failed outcome holding `trace`.
    #[inline]
    pub fn failure(trace: ErrorTrace) -> Self {
        Self::make_error(trace)
    }

    /// Creates a failed outcome whose trace holds a single entry.
    ///
    /// Equivalent to building a one-entry [`ErrorTrace`] and wrapping it.
    /// The [`err_outcome!`](crate::err_outcome) macro forwards here with the
    /// calling file and line filled in.
    pub fn failure_with(
        record: impl Into<ErrorRecord>,
        file_name: impl Into<String>,
        line: i32,
    ) -> Self {
        Self::make_error(ErrorTrace::from_entry(record, file_name, line))
    }

    /// Lifts the error branch of an outcome with a different success type.
    ///
    /// # Panics
    ///
    /// Panics if `other` holds a value; lifting a successful outcome is a
    /// programming error.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_trace::{err_outcome, Outcome};
    ///
    /// let parsed: Outcome<i32> = err_outcome!("Invalid number.");
    /// let wrapped: Outcome<f64> = Outcome::failure_from(parsed);
    ///
    /// assert!(wrapped.has_error());
    /// ```
    pub fn failure_from<U>(other: Outcome<U>) -> Self {
        Self::make_error(other.into_error_trace())
    }

    /// Returns `true` iff the error branch is live.
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        matches!(self.repr, OutcomeRepr::Failure(_))
    }

    /// Returns `true` iff the value branch is live.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.repr, OutcomeRepr::Success(_))
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the rendered trace as the message if the error branch is
    /// live.
    #[must_use]
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(fault) => panic!("{}", fault),
        }
    }

    /// Returns the success value, or the misuse fault carrying the rendered
    /// trace.
    pub fn try_value(&self) -> Result<&T, AccessError> {
        match &self.repr {
            OutcomeRepr::Success(value) => Ok(value),
            OutcomeRepr::Failure(trace) => Err(AccessError::new(trace.render())),
        }
    }

    /// Mutable variant of [`value`](Self::value).
    ///
    /// # Panics
    ///
    /// Panics with the rendered trace as the message if the error branch is
    /// live.
    pub fn value_mut(&mut self) -> &mut T {
        match self.repr {
            OutcomeRepr::Success(ref mut value) => value,
            OutcomeRepr::Failure(ref trace) => panic!("{}", AccessError::new(trace.render())),
        }
    }

    /// Consumes the outcome, returning the success value.
    ///
    /// # Panics
    ///
    /// Panics with the rendered trace as the message if the error branch is
    /// live.
    #[must_use]
    pub fn into_value(self) -> T {
        match self.repr {
            OutcomeRepr::Success(value) => value,
            OutcomeRepr::Failure(trace) => panic!("{}", AccessError::new(trace.render())),
        }
    }

    /// Returns the error trace.
    ///
    /// # Panics
    ///
    /// Panics with an [`OutcomeIsSuccessError`] fault if the value branch is
    /// live.
    #[must_use]
    pub fn error_trace(&self) -> &ErrorTrace {
        match self.try_error_trace() {
            Ok(trace) => trace,
            Err(fault) => panic!("{}", fault),
        }
    }

    /// Returns the error trace, or the "outcome is successful" misuse fault.
    pub fn try_error_trace(&self) -> Result<&ErrorTrace, AccessError> {
        match &self.repr {
            OutcomeRepr::Success(_) => Err(AccessError::outcome_is_success()),
            OutcomeRepr::Failure(trace) => Ok(trace),
        }
    }

    /// Mutable variant of [`error_trace`](Self::error_trace).
    ///
    /// # Panics
    ///
    /// Panics with an [`OutcomeIsSuccessError`] fault if the value branch is
    /// live.
    pub fn error_trace_mut(&mut self) -> &mut ErrorTrace {
        match self.repr {
            OutcomeRepr::Failure(ref mut trace) => trace,
            OutcomeRepr::Success(_) => panic!("{}", AccessError::outcome_is_success()),
        }
    }

    /// Consumes the outcome, returning the error trace.
    ///
    /// # Panics
    ///
    /// Panics with an [`OutcomeIsSuccessError`] fault if the value branch is
    /// live.
    #[must_use]
    pub fn into_error_trace(self) -> ErrorTrace {
        match self.repr {
            OutcomeRepr::Failure(trace) => trace,
            OutcomeRepr::Success(_) => panic!("{}", AccessError::outcome_is_success()),
        }
    }

    /// Borrows whichever branch is live.
    pub fn as_result(&self) -> Result<&T, &ErrorTrace> {
        match &self.repr {
            OutcomeRepr::Success(value) => Ok(value),
            OutcomeRepr::Failure(trace) => Err(trace),
        }
    }

    /// Consumes the outcome into a standard `Result`.
    pub fn into_result(self) -> Result<T, ErrorTrace> {
        match self.repr {
            OutcomeRepr::Success(value) => Ok(value),
            OutcomeRepr::Failure(trace) => Err(trace),
        }
    }

    /// Consumes the outcome, returning the value branch if it is live.
    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self.repr {
            OutcomeRepr::Success(value) => Some(value),
            OutcomeRepr::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the error branch if it is live.
    #[must_use]
    pub fn err(self) -> Option<ErrorTrace> {
        match self.repr {
            OutcomeRepr::Success(_) => None,
            OutcomeRepr::Failure(trace) => Some(trace),
        }
    }
}

impl<T> Deref for Outcome<T> {
    type Target = T;

    /// Forwards to [`value`](Self::value), panicking on the error branch.
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T> DerefMut for Outcome<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

/// Typed misuse fault raised when an [`Outcome`] accessor is called on the
/// wrong branch.
///
/// Carries the rendered trace text: the trace held by the outcome when the
/// value branch was requested, or a one-entry [`OutcomeIsSuccessError`] trace
/// when the error branch was requested from a successful outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessError {
    rendered: String,
}

impl AccessError {
    fn new(rendered: String) -> Self {
        Self { rendered }
    }

    fn outcome_is_success() -> Self {
        Self::new(ErrorTrace::from(OutcomeIsSuccessError::default_record()).render())
    }

    /// Returns the rendered trace text carried by the fault.
    #[must_use]
    pub fn rendered_trace(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rendered)
    }
}

impl core::error::Error for AccessError {}
