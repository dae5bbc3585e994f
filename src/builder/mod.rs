//! Staged construction of [`ErrorRecord`]s.
//!
//! [`ErrorBuilder`] accumulates configuration through chained calls that take
//! and return the builder by value. A terminal call (`error`, `error_fmt`,
//! `wrap`, `wrap_with`, `wrap_fmt`) consumes it, evaluates lazy context in
//! insertion order, captures the call stack and emits the record, so a builder
//! can never be reused or observed half-built.
//!
//! The type parameter selects what a terminal call returns: a plain
//! [`ErrorRecord`] (the default), an [`Outcome<T>`] failure, or a
//! `Result<T, ErrorRecord>`.
//!
//! # Examples
//!
//! ```
//! use error_trail::{ErrorBuilder, Outcome};
//!
//! let record = ErrorBuilder::with_code("QUOTA_EXCEEDED")
//!     .in_domain("billing")
//!     .tags(["limits"])
//!     .with("used", 120)
//!     .with_lazy("plan", || "free".to_string())
//!     .public("You have reached your plan limit.")
//!     .error("quota of 100 requests exceeded");
//!
//! assert_eq!(record.render("C"), "[QUOTA_EXCEEDED] quota of 100 requests exceeded");
//!
//! fn load() -> Outcome<String> {
//!     ErrorBuilder::typed().code(404).error("missing")
//! }
//! assert!(load().is_failure());
//! ```
use std::fmt;
use core::marker::PhantomData;
use std::error::Error;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::stack::{FrameFilter, StackTrace};
use crate::types::error_record::RecordData;
use crate::types::{ContextValue, ErrorCode, ErrorRecord, Outcome, Subject};

mod pending;

use pending::{PendingContext, PendingValue};

/// Maximum number of nested `source()` levels turned into causes by `wrap`.
pub const MAX_CAUSE_DEPTH: usize = 32;

/// Output produced by a builder's terminal call.
pub trait FromRecord {
    fn from_record(record: ErrorRecord) -> Self;
}

impl FromRecord for ErrorRecord {
    #[inline]
    fn from_record(record: ErrorRecord) -> Self {
        record
    }
}

impl<T> FromRecord for Outcome<T> {
    #[inline]
    fn from_record(record: ErrorRecord) -> Self {
        Outcome::Failure(record)
    }
}

impl<T> FromRecord for Result<T, ErrorRecord> {
    #[inline]
    fn from_record(record: ErrorRecord) -> Self {
        Err(record)
    }
}

/// Single-use staging value for an [`ErrorRecord`].
///
/// Lazy closures are not required to be `Send`, so a builder stays on the
/// thread that created it.
#[must_use = "a builder does nothing until a terminal method such as `error` is called"]
pub struct ErrorBuilder<O = ErrorRecord> {
    code: ErrorCode,
    context: PendingContext,
    cause: Option<ErrorRecord>,
    domain: Option<String>,
    tags: Vec<String>,
    public_message: Option<String>,
    hint: Option<String>,
    owner: Option<String>,
    trace_id: Option<String>,
    span_id: Option<String>,
    duration: Option<Duration>,
    user: Option<Subject>,
    tenant: Option<Subject>,
    skip: usize,
    filter: Option<FrameFilter>,
    _output: PhantomData<fn() -> O>,
}

impl ErrorBuilder<ErrorRecord> {
    /// Starts a builder whose terminal calls return an [`ErrorRecord`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a builder seeded with an identifier.
    #[inline]
    pub fn with_code(code: impl Into<ErrorCode>) -> Self {
        Self::new().code(code)
    }

    /// Starts a builder whose terminal calls return `Outcome<T>::Failure`.
    #[inline]
    pub fn typed<T>() -> ErrorBuilder<Outcome<T>> {
        ErrorBuilder::default()
    }
}

impl<O> Default for ErrorBuilder<O> {
    fn default() -> Self {
        Self {
            code: ErrorCode::EMPTY,
            context: PendingContext::default(),
            cause: None,
            domain: None,
            tags: Vec::new(),
            public_message: None,
            hint: None,
            owner: None,
            trace_id: None,
            span_id: None,
            duration: None,
            user: None,
            tenant: None,
            skip: 0,
            filter: None,
            _output: PhantomData,
        }
    }
}

impl<O> ErrorBuilder<O> {
    /// Sets the identifier.
    #[inline]
    pub fn code(mut self, code: impl Into<ErrorCode>) -> Self {
        self.code = code.into();
        self
    }

    /// Upserts one context entry.
    #[inline]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.context.upsert(key.into(), PendingValue::Ready(value.into()));
        self
    }

    /// Upserts several context entries in order.
    pub fn with_all<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        for (key, value) in pairs {
            self.context.upsert(key.into(), PendingValue::Ready(value.into()));
        }
        self
    }

    /// Stores a closure evaluated once by the terminal call.
    #[inline]
    pub fn with_lazy<F, V>(mut self, key: impl Into<String>, generator: F) -> Self
    where
        F: FnOnce() -> V + 'static,
        V: Into<ContextValue>,
    {
        self.context.upsert(key.into(), PendingValue::lazy(generator));
        self
    }

    /// Appends tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Appends a single tag.
    #[inline]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Sets the domain.
    #[inline]
    pub fn in_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the message safe to show to end users.
    #[inline]
    pub fn public(mut self, message: impl Into<String>) -> Self {
        self.public_message = Some(message.into());
        self
    }

    #[inline]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[inline]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the trace id, passed through as-is.
    #[inline]
    pub fn trace(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Sets the span id, passed through as-is.
    #[inline]
    pub fn span(mut self, span_id: impl Into<String>) -> Self {
        self.span_id = Some(span_id.into());
        self
    }

    /// Sets the duration to the time elapsed since `start`.
    #[inline]
    pub fn since(mut self, start: Instant) -> Self {
        self.duration = Some(start.elapsed());
        self
    }

    #[inline]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[inline]
    pub fn user(mut self, id: impl Into<String>) -> Self {
        self.user = Some(Subject::new(id));
        self
    }

    pub fn user_with<I, K, V>(mut self, id: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.user = Some(Subject::with_attributes(id, attributes));
        self
    }

    #[inline]
    pub fn tenant(mut self, id: impl Into<String>) -> Self {
        self.tenant = Some(Subject::new(id));
        self
    }

    pub fn tenant_with<I, K, V>(mut self, id: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        self.tenant = Some(Subject::with_attributes(id, attributes));
        self
    }

    /// Sets the cause explicitly; `wrap` then keeps it instead of deriving
    /// one from the fault's sources.
    #[inline]
    pub fn cause(mut self, cause: ErrorRecord) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Hides `frames` additional innermost frames, e.g. a helper that builds
    /// errors on behalf of its callers.
    #[inline]
    pub fn skip_frames(mut self, frames: usize) -> Self {
        self.skip = frames;
        self
    }

    /// Replaces the default frame filter.
    #[inline]
    pub fn frame_filter(mut self, filter: FrameFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    fn build(self, message: String, fault: Option<&(dyn Error + 'static)>) -> ErrorRecord {
        let context = self.context.resolve();
        let cause = self.cause.or_else(|| fault.and_then(source_chain));
        let stack = match &self.filter {
            Some(filter) => StackTrace::capture(self.skip, filter),
            None => StackTrace::capture(self.skip, &FrameFilter::default()),
        };

        let record = ErrorRecord::from_data(RecordData {
            code: self.code,
            message,
            context,
            cause,
            stack,
            timestamp: Utc::now(),
            domain: self.domain,
            tags: self.tags,
            public_message: self.public_message,
            hint: self.hint,
            owner: self.owner,
            trace_id: self.trace_id,
            span_id: self.span_id,
            duration: self.duration,
            user: self.user,
            tenant: self.tenant,
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "error_trail",
            code = %record.code(),
            domain = record.domain(),
            frames = record.stack().len(),
            causes = record.depth(),
            "error record created"
        );

        record
    }
}

impl<O: FromRecord> ErrorBuilder<O> {
    /// Produces the error with `message`.
    #[inline(never)]
    pub fn error(self, message: impl Into<String>) -> O {
        O::from_record(self.build(message.into(), None))
    }

    /// Produces the error with a formatted message.
    ///
    /// ```
    /// use error_trail::ErrorBuilder;
    ///
    /// let user = 7;
    /// let err = ErrorBuilder::new().error_fmt(format_args!("user {user} not found"));
    /// assert_eq!(err.message(), "user 7 not found");
    /// ```
    #[inline(never)]
    pub fn error_fmt(self, args: fmt::Arguments<'_>) -> O {
        O::from_record(self.build(fmt::format(args), None))
    }

    /// Wraps a fault, taking its `Display` output as the message.
    ///
    /// Without an explicit cause, each nested `source()` of the fault becomes
    /// a cause record, up to [`MAX_CAUSE_DEPTH`] levels.
    #[inline(never)]
    pub fn wrap(self, fault: &(dyn Error + 'static)) -> O {
        O::from_record(self.build(fault.to_string(), Some(fault)))
    }

    /// Wraps a fault with an explicit message.
    #[inline(never)]
    pub fn wrap_with(self, fault: &(dyn Error + 'static), message: impl Into<String>) -> O {
        O::from_record(self.build(message.into(), Some(fault)))
    }

    /// Wraps a fault with a formatted message.
    #[inline(never)]
    pub fn wrap_fmt(self, fault: &(dyn Error + 'static), args: fmt::Arguments<'_>) -> O {
        O::from_record(self.build(fmt::format(args), Some(fault)))
    }
}

impl<O> fmt::Debug for ErrorBuilder<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorBuilder")
            .field("code", &self.code)
            .field("context_entries", &self.context.len())
            .field("cause", &self.cause.as_ref().map(ErrorRecord::message))
            .field("domain", &self.domain)
            .field("tags", &self.tags)
            .field("skip", &self.skip)
            .finish_non_exhaustive()
    }
}

/// Turns the `source()` chain below `fault` into cause records, innermost
/// first, so every record only references one that already exists.
///
/// A source that already is an [`ErrorRecord`] is linked as-is and ends the walk.
fn source_chain(fault: &(dyn Error + 'static)) -> Option<ErrorRecord> {
    let mut messages = Vec::new();
    let mut base = None;
    let mut next = fault.source();
    while let Some(source) = next {
        if let Some(record) = source.downcast_ref::<ErrorRecord>() {
            base = Some(record.clone());
            break;
        }
        if messages.len() == MAX_CAUSE_DEPTH {
            break;
        }
        messages.push(source.to_string());
        next = source.source();
    }

    messages.into_iter().rev().fold(base, |cause, message| {
        Some(ErrorRecord::from_data(RecordData {
            message,
            cause,
            timestamp: Utc::now(),
            ..RecordData::default()
        }))
    })
}

/// Stackless record for `fault` and its sources. A fault that already is an
/// [`ErrorRecord`] is returned as-is.
pub(crate) fn fault_record(fault: &(dyn Error + 'static)) -> ErrorRecord {
    if let Some(record) = fault.downcast_ref::<ErrorRecord>() {
        return record.clone();
    }
    ErrorRecord::from_data(RecordData {
        message: fault.to_string(),
        cause: source_chain(fault),
        timestamp: Utc::now(),
        ..RecordData::default()
    })
}
