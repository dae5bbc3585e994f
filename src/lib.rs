//! Value-based error reporting.
//!
//! Fallible code returns an [`Outcome<T>`]: either a success payload or an
//! immutable [`ErrorRecord`] carrying a code, message, typed context, cause
//! chain, filtered call-site stack and classification/tracking fields.
//! Records are produced by an [`ErrorBuilder`] and read through accessors or
//! one of the rendered views in [`render`].
//!
//! # Examples
//!
//! ## Building a record
//!
//! ```
//! use error_trail::ErrorBuilder;
//!
//! let err = ErrorBuilder::with_code("TEST")
//!     .in_domain("test-domain")
//!     .tags(["tag1", "tag2"])
//!     .with("key1", "value1")
//!     .with("key2", 42)
//!     .error("Test message");
//!
//! let full = err.render("FULL");
//! assert!(full.contains("[TEST] Test message"));
//! assert!(full.contains("Domain: test-domain"));
//! assert!(full.contains("Tags: tag1, tag2"));
//! assert!(full.contains("Context: key1=value1, key2=42"));
//! ```
//!
//! ## Returning outcomes
//!
//! ```
//! use error_trail::{ErrorBuilder, Outcome};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32> {
//!     if b == 0 {
//!         return ErrorBuilder::typed().code("DIV_ZERO").with("dividend", a).error("division by zero");
//!     }
//!     Outcome::success(a / b)
//! }
//!
//! let text = divide(1, 0).match_with(|v| v.to_string(), |e| e.render("C"));
//! assert_eq!(text, "[DIV_ZERO] division by zero");
//! ```
//!
//! ## Wrapping foreign errors
//!
//! ```
//! use error_trail::ErrorBuilder;
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
//! let err = ErrorBuilder::with_code("CONFIG").wrap_with(&io, "cannot load configuration");
//! assert_eq!(err.render("C"), "[CONFIG] cannot load configuration");
//! ```
//!
//! # Features
//!
//! - `stack` (default): call-site capture through the `backtrace` crate
//! - `tracing`: debug events for every created record
//! - `serde`: `Serialize` for the data model
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Staged record construction
pub mod builder;
/// Record creation shorthands
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Textual and JSON views
pub mod render;
/// Call-site stack capture and filtering
pub mod stack;
/// Extension traits for `Result`
pub mod traits;
/// Identifiers, context values, records and outcomes
pub mod types;

pub use builder::{ErrorBuilder, FromRecord, MAX_CAUSE_DEPTH};
pub use render::{render, Format, RenderConfig, Renderer};
pub use stack::{FrameFilter, StackFrame, StackTrace};
pub use traits::{IntoOutcome, ResultExt};
pub use types::{
    Chain, ContextMap, ContextValue, ErrorCode, ErrorRecord, FingerprintConfig, Outcome,
    RecordResult, Subject,
};
