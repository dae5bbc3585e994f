//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trail::prelude::*;
//!
//! fn port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().or_fault("invalid port")
//! }
//!
//! assert!(port("x").is_failure());
//! ```

pub use crate::fault;

pub use crate::builder::ErrorBuilder;
pub use crate::render::{render, Format};
pub use crate::types::{ContextValue, ErrorCode, ErrorRecord, Outcome};

pub use crate::traits::{IntoOutcome, ResultExt};
