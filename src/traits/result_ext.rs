//! Extension traits turning `Result`s into [`Outcome`]s.
//!
//! # Examples
//!
//! ```
//! use error_trail::traits::ResultExt;
//! use error_trail::Outcome;
//!
//! fn read_config() -> Outcome<String> {
//!     std::fs::read_to_string("/definitely/missing/config.toml")
//!         .or_fault_with(|b| b.code("CONFIG_READ").in_domain("config"))
//! }
//!
//! let outcome = read_config();
//! assert!(outcome.is_failure());
//! assert_eq!(outcome.error().code().to_string(), "CONFIG_READ");
//! ```
use std::error::Error;

use crate::builder::{fault_record, ErrorBuilder};
use crate::types::{ErrorRecord, Outcome};

/// Extension trait wrapping the error of a `Result` into an [`ErrorRecord`].
///
/// The builder only exists on the error path; `Ok` values pass through
/// without any allocation or stack capture.
pub trait ResultExt<T, E> {
    /// Fails with `message`; the error and its sources become the cause chain.
    fn or_fault(self, message: impl Into<String>) -> Outcome<T>;

    /// Wraps the error after letting `configure` decorate the builder.
    ///
    /// The message is the error's `Display` output.
    fn or_fault_with<F>(self, configure: F) -> Outcome<T>
    where
        F: FnOnce(ErrorBuilder<Outcome<T>>) -> ErrorBuilder<Outcome<T>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + 'static,
{
    #[inline(never)]
    fn or_fault(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => ErrorBuilder::typed().cause(fault_record(&error)).error(message),
        }
    }

    #[inline(never)]
    fn or_fault_with<F>(self, configure: F) -> Outcome<T>
    where
        F: FnOnce(ErrorBuilder<Outcome<T>>) -> ErrorBuilder<Outcome<T>>,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => configure(ErrorBuilder::typed()).wrap(&error),
        }
    }
}

/// Lossless conversion of `Result<T, ErrorRecord>` into [`Outcome<T>`].
pub trait IntoOutcome<T> {
    fn into_outcome(self) -> Outcome<T>;
}

impl<T> IntoOutcome<T> for Result<T, ErrorRecord> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from(self)
    }
}
