//! Data model: identifiers, context, records and outcomes.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ContextMap, ErrorCode, ErrorRecord, Outcome};
//!
//! let record = ErrorRecord::new("disk full");
//! assert!(record.code().is_empty());
//!
//! let mut context = ContextMap::new();
//! context.insert("free_bytes", 0);
//! assert_eq!(context.to_string(), "free_bytes=0");
//!
//! let outcome: Outcome<u64> = Outcome::failure(record);
//! assert!(outcome.try_value().is_none());
//! assert_eq!(ErrorCode::from(507), ErrorCode::Number(507));
//! ```
pub mod context_value;
pub mod error_code;
pub mod error_record;
pub mod outcome;
pub mod subject;

pub use context_value::{ContextMap, ContextValue};
pub use error_code::ErrorCode;
pub use error_record::{Chain, ErrorRecord, FingerprintConfig};
pub use outcome::Outcome;
pub use subject::Subject;

/// `Result` alias carrying an [`ErrorRecord`] on failure.
pub type RecordResult<T> = Result<T, ErrorRecord>;
