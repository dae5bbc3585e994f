//! Extension traits bridging `Result` and [`Outcome`](crate::Outcome).
//!
//! - [`ResultExt`]: wraps any `std::error::Error` into an [`ErrorRecord`](crate::ErrorRecord)
//! - [`IntoOutcome`]: converts `Result<T, ErrorRecord>` without rewrapping
pub mod result_ext;

pub use result_ext::{IntoOutcome, ResultExt};
