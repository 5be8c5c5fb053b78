//! Kind declaration and error-recording macros.
//!
//! - [`macro@crate::error_kind`] - Declares a new error kind: a unit struct
//!   implementing [`ErrorKind`](crate::traits::ErrorKind) whose id is hashed
//!   from its qualifying name at compile time.
//! - [`macro@crate::err_add`] - Appends to an
//!   [`ErrorTrace`](crate::types::ErrorTrace), automatically capturing the
//!   current file path and line number using `file!()` and `line!()`.
//! - [`macro@crate::err_outcome`] - Builds a failed
//!   [`Outcome`](crate::types::Outcome) from a message or record, with the
//!   same implicit location capture.
//!
//! # Examples
//!
//! ```
//! use error_trace::{err_add, error_kind, ErrorTrace};
//!
//! error_kind!(pub WatchdogError in sched);
//!
//! fn poll(deadline_missed: bool, err: &mut ErrorTrace) {
//!     if deadline_missed {
//!         err_add!(err, "Deadline missed twice in a row.", WatchdogError);
//!     }
//! }
//!
//! let mut err = ErrorTrace::new();
//! poll(true, &mut err);
//! assert!(err.is::<WatchdogError>());
//! ```

/// Declares a new error kind.
///
/// Expands to a unit struct implementing
/// [`ErrorKind`](crate::traits::ErrorKind), with
/// [`NAMESPACE`](crate::traits::ErrorKind::NAMESPACE) and
/// [`NAME`](crate::traits::ErrorKind::NAME) taken from the declaration and
/// [`ID`](crate::traits::ErrorKind::ID) computed by
/// [`kind_id`](crate::kind_id) at compile time. The trait's default methods
/// provide the two record factories,
/// [`default_record`](crate::traits::ErrorKind::default_record) and
/// [`record`](crate::traits::ErrorKind::record).
///
/// # Syntax
///
/// - `error_kind!(pub Kind);` - Global kind (empty namespace).
/// - `error_kind!(pub Kind in ns);` - Kind qualified by namespace `ns`; the
///   namespace participates only in the id hash and in rendering, it does not
///   have to exist as a Rust module.
/// - Either form may carry a trailing `{ ... }` block of extra inherent items
///   (custom factories beyond the two defaults). Inside the block, `Self`
///   is the declared kind; bring `ErrorKind` into scope to call the default
///   factories.
///
/// # Collisions
///
/// Two kinds declared with different qualifying names almost certainly get
/// different ids, but the hash gives no guarantee. See
/// [`kind_id`](crate::kind_id).
///
/// # Examples
///
/// ```
/// use error_trace::{error_kind, ErrorKind};
///
/// error_kind!(pub DivisionByZeroError);
///
/// error_kind! {
///     /// Raised when a negative value reaches a square root.
///     pub NegativeNumberError in math {
///         pub fn for_value(value: i32) -> error_trace::ErrorRecord {
///             Self::record(format!("A positive value is expected (value = {value})."))
///         }
///     }
/// }
///
/// assert_ne!(DivisionByZeroError::id(), NegativeNumberError::id());
/// assert_eq!(NegativeNumberError::for_value(-2).namespace_name(), "math");
/// ```
#[macro_export]
macro_rules! error_kind {
    ($(#[$meta:meta])* $vis:vis $name:ident $(,)?) => {
        $crate::__error_kind_impl!($(#[$meta])* $vis $name, "", {});
    };
    ($(#[$meta:meta])* $vis:vis $name:ident in $ns:ident $(,)?) => {
        $crate::__error_kind_impl!($(#[$meta])* $vis $name, stringify!($ns), {});
    };
    ($(#[$meta:meta])* $vis:vis $name:ident { $($members:tt)* }) => {
        $crate::__error_kind_impl!($(#[$meta])* $vis $name, "", { $($members)* });
    };
    ($(#[$meta:meta])* $vis:vis $name:ident in $ns:ident { $($members:tt)* }) => {
        $crate::__error_kind_impl!($(#[$meta])* $vis $name, stringify!($ns), { $($members)* });
    };
}

/// Internal expansion target for [`error_kind!`].
#[macro_export]
#[doc(hidden)]
macro_rules! __error_kind_impl {
    ($(#[$meta:meta])* $vis:vis $name:ident, $ns:expr, { $($members:tt)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::traits::ErrorKind for $name {
            const NAMESPACE: &'static str = $ns;
            const NAME: &'static str = stringify!($name);
            const ID: i32 = $crate::traits::kind_id($ns, stringify!($name));
        }

        impl $name {
            $($members)*
        }
    };
}

/// Appends to an [`ErrorTrace`](crate::types::ErrorTrace), capturing the
/// calling file and line.
///
/// # Syntax
///
/// - `err_add!(trace, record)` - `record` is anything convertible into an
///   [`ErrorRecord`](crate::types::ErrorRecord): a pre-built record or a bare
///   message, which is stamped with the generic kind.
/// - `err_add!(trace, message, Kind)` - Stamps `message` with `Kind` instead.
///
/// # Examples
///
/// ```
/// use error_trace::{err_add, error_kind, ErrorTrace};
///
/// error_kind!(pub IoError in fs);
///
/// let mut err = ErrorTrace::new();
/// err_add!(err, "Could not stat the path.");
/// err_add!(err, "Open failed.", IoError);
///
/// assert_eq!(err.len(), 2);
/// assert!(err.is::<IoError>());
/// assert_eq!(err.last().file_name(), file!());
/// ```
#[macro_export]
macro_rules! err_add {
    ($trace:expr, $record:expr $(,)?) => {
        $trace.append($record, file!(), line!() as i32)
    };
    ($trace:expr, $message:expr, $kind:ty $(,)?) => {
        $trace.append(
            <$kind as $crate::traits::ErrorKind>::record($message),
            file!(),
            line!() as i32,
        )
    };
}

/// Builds a failed [`Outcome`](crate::types::Outcome) from a message or
/// record, capturing the calling file and line.
///
/// Equivalent to constructing a one-entry trace and wrapping it with
/// [`Outcome::failure`](crate::types::Outcome::failure); the success type is
/// inferred from the call site.
///
/// # Syntax
///
/// - `err_outcome!(record)` - Generic kind for bare messages, or any
///   pre-built record.
/// - `err_outcome!(message, Kind)` - Stamps `message` with `Kind`.
///
/// # Examples
///
/// ```
/// use error_trace::{err_outcome, error_kind, Outcome};
///
/// error_kind!(pub ConfigError in cfg);
///
/// let missing: Outcome<String> = err_outcome!("No configuration found.");
/// assert!(missing.has_error());
///
/// let bad_key: Outcome<()> = err_outcome!("Unknown key `retries`.", ConfigError);
/// assert!(bad_key.error_trace().is::<ConfigError>());
/// ```
#[macro_export]
macro_rules! err_outcome {
    ($record:expr $(,)?) => {
        $crate::types::Outcome::failure_with($record, file!(), line!() as i32)
    };
    ($message:expr, $kind:ty $(,)?) => {
        $crate::types::Outcome::failure_with(
            <$kind as $crate::traits::ErrorKind>::record($message),
            file!(),
            line!() as i32,
        )
    };
}
