//! The immutable error record.
//!
//! [`ErrorRecord`] is a cheap, clonable handle over write-once data. Records
//! reference earlier records as their cause, so a cause chain is always
//! acyclic and several outer records may share one cause.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ErrorBuilder, ErrorRecord};
//!
//! let root = ErrorRecord::new("connection reset");
//! let err = ErrorBuilder::new()
//!     .code("DB_UNAVAILABLE")
//!     .in_domain("storage")
//!     .with("attempt", 3)
//!     .cause(root.clone())
//!     .error("query failed");
//!
//! assert_eq!(err.message(), "query failed");
//! assert_eq!(err.code().to_string(), "DB_UNAVAILABLE");
//! assert_eq!(err.cause(), Some(&root));
//! assert_eq!(err.chain().count(), 2);
//! ```
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::builder::ErrorBuilder;
use crate::render::Format;
use crate::stack::{FrameFilter, StackTrace};
use crate::types::{ContextMap, ContextValue, ErrorCode, Subject};

mod fingerprint;
#[cfg(feature = "serde")]
mod serialize;
mod traits;

pub use fingerprint::FingerprintConfig;

/// Immutable composite of everything captured for one error occurrence.
///
/// Cloning shares the underlying data; equality is identity of that data.
#[must_use]
#[derive(Clone)]
pub struct ErrorRecord {
    inner: Arc<RecordData>,
}

/// Field storage, written once by [`ErrorRecord::from_data`].
#[derive(Debug, Default)]
pub(crate) struct RecordData {
    pub(crate) code: ErrorCode,
    pub(crate) message: String,
    pub(crate) context: ContextMap,
    pub(crate) cause: Option<ErrorRecord>,
    pub(crate) stack: StackTrace,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) domain: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) public_message: Option<String>,
    pub(crate) hint: Option<String>,
    pub(crate) owner: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) span_id: Option<String>,
    pub(crate) duration: Option<Duration>,
    pub(crate) user: Option<Subject>,
    pub(crate) tenant: Option<Subject>,
}

impl ErrorRecord {
    /// Creates a record carrying only a message and the caller's stack.
    ///
    /// The code is [`ErrorCode::EMPTY`] and the context is empty.
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_data(RecordData {
            message: message.into(),
            stack: StackTrace::capture(0, &FrameFilter::default()),
            timestamp: Utc::now(),
            ..RecordData::default()
        })
    }

    /// Starts a builder producing a plain record.
    #[inline]
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::new()
    }

    #[inline]
    pub(crate) fn from_data(data: RecordData) -> Self {
        Self { inner: Arc::new(data) }
    }

    #[inline]
    pub fn code(&self) -> &ErrorCode {
        &self.inner.code
    }

    /// The primary message; always defined, possibly empty.
    #[inline]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    #[inline]
    pub fn context(&self) -> &ContextMap {
        &self.inner.context
    }

    /// Shortcut for `self.context().get(key)`.
    #[inline]
    pub fn context_value(&self, key: &str) -> Option<&ContextValue> {
        self.inner.context.get(key)
    }

    #[inline]
    pub fn cause(&self) -> Option<&ErrorRecord> {
        self.inner.cause.as_ref()
    }

    /// Filtered call-site frames, innermost first.
    #[inline]
    pub fn stack(&self) -> &StackTrace {
        &self.inner.stack
    }

    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.inner.timestamp
    }

    #[inline]
    pub fn domain(&self) -> Option<&str> {
        self.inner.domain.as_deref()
    }

    /// Tags in insertion order; empty when none were set.
    #[inline]
    pub fn tags(&self) -> &[String] {
        &self.inner.tags
    }

    #[inline]
    pub fn public_message(&self) -> Option<&str> {
        self.inner.public_message.as_deref()
    }

    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.inner.hint.as_deref()
    }

    #[inline]
    pub fn owner(&self) -> Option<&str> {
        self.inner.owner.as_deref()
    }

    #[inline]
    pub fn trace_id(&self) -> Option<&str> {
        self.inner.trace_id.as_deref()
    }

    #[inline]
    pub fn span_id(&self) -> Option<&str> {
        self.inner.span_id.as_deref()
    }

    #[inline]
    pub fn duration(&self) -> Option<Duration> {
        self.inner.duration
    }

    #[inline]
    pub fn user(&self) -> Option<&Subject> {
        self.inner.user.as_ref()
    }

    #[inline]
    pub fn tenant(&self) -> Option<&Subject> {
        self.inner.tenant.as_ref()
    }

    /// Iterates this record and then each cause, outermost first.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The innermost record of the cause chain (`self` when there is no cause).
    pub fn root_cause(&self) -> &ErrorRecord {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Number of causes below this record.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Returns `true` when both handles point at the same record.
    #[inline]
    pub fn ptr_eq(&self, other: &ErrorRecord) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Compares primary messages, ignoring identity and every other field.
    #[inline]
    pub fn same_message(&self, other: &ErrorRecord) -> bool {
        self.message() == other.message()
    }

    /// Renders the record for a format token (`"F"`, `"JSON"`, ...).
    ///
    /// Unknown tokens render the primary message.
    #[must_use]
    pub fn render(&self, token: &str) -> String {
        crate::render::render(self, token)
    }

    /// Renders the record in the given view.
    #[must_use]
    pub fn render_as(&self, format: Format) -> String {
        crate::render::Renderer::default().render(self, format)
    }
}

/// A record with an empty message, empty code, no stack and the epoch as
/// timestamp.
impl Default for ErrorRecord {
    fn default() -> Self {
        Self::from_data(RecordData::default())
    }
}

/// Iterator over a cause chain, created by [`ErrorRecord::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ErrorRecord>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}
