//! Success-or-record tagged union.
//!
//! [`Outcome<T>`] holds either a success payload or an [`ErrorRecord`].
//! Reading the wrong variant through [`Outcome::value`] or
//! [`Outcome::error`] is API misuse and panics; the `try_*` probes never do.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ErrorBuilder, Outcome};
//!
//! fn parse_port(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(err) => ErrorBuilder::typed().code("BAD_PORT").with("raw", raw).wrap(&err),
//!     }
//! }
//!
//! assert_eq!(*parse_port("8080").value(), 8080);
//!
//! let failed = parse_port("http");
//! assert!(failed.is_failure());
//! assert_eq!(failed.error().code().to_string(), "BAD_PORT");
//! assert_eq!(failed.value_or(80), 80);
//! ```
use crate::types::ErrorRecord;

/// Either a success payload or a failure-carrying [`ErrorRecord`].
#[must_use = "this `Outcome` may be a failure, which should be handled"]
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorRecord),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub fn failure(error: ErrorRecord) -> Self {
        Self::Failure(error)
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::value()` on a failure: {}", error.message())
            }
        }
    }

    /// Consumes the outcome and returns the payload.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::into_value()` on a failure: {}", error.message())
            }
        }
    }

    /// Returns the error record.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn error(&self) -> &ErrorRecord {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("called `Outcome::error()` on a success"),
        }
    }

    /// Consumes the outcome and returns the error record.
    ///
    /// # Panics
    ///
    /// Panics if this is a success.
    #[track_caller]
    pub fn into_error(self) -> ErrorRecord {
        match self {
            Self::Failure(error) => error,
            Self::Success(_) => panic!("called `Outcome::into_error()` on a success"),
        }
    }

    #[inline]
    pub fn try_value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub fn try_error(&self) -> Option<&ErrorRecord> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) => None,
        }
    }

    /// Returns the payload, or `fallback` on failure.
    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(|_| T::default())
    }

    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(ErrorRecord) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Runs exactly one of the two branches and returns its result.
    #[inline]
    pub fn match_with<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(ErrorRecord) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Borrowing form of [`match_with`](Self::match_with).
    #[inline]
    pub fn match_ref<R, S, F>(&self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(&T) -> R,
        F: FnOnce(&ErrorRecord) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Replaces the record on failure, e.g. to wrap it as the cause of a new one.
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(ErrorRecord) -> ErrorRecord,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(f(error)),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<T, ErrorRecord> {
        self.into()
    }
}

/// Success payloads compare by value; failures by record identity.
impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Success(a), Self::Success(b)) => a == b,
            (Self::Failure(a), Self::Failure(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Outcome<T> {}

impl<T> From<ErrorRecord> for Outcome<T> {
    #[inline]
    fn from(error: ErrorRecord) -> Self {
        Self::Failure(error)
    }
}

impl<T> From<Result<T, ErrorRecord>> for Outcome<T> {
    #[inline]
    fn from(result: Result<T, ErrorRecord>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorRecord> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
