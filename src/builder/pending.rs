//! Deferred context values held by a builder until its terminal call.
//!
//! A lazy entry wraps a closure that runs exactly once, when the builder
//! produces its record. Closures overwritten by a later write to the same key
//! are dropped without running.
use core::fmt;

use smallvec::SmallVec;

use crate::types::{ContextMap, ContextValue};

/// A context value that is either ready or still to be computed.
pub(crate) enum PendingValue {
    Ready(ContextValue),
    Lazy(Box<dyn FnOnce() -> ContextValue>),
}

impl PendingValue {
    /// Wraps a closure whose result becomes the context value.
    #[inline]
    pub(crate) fn lazy<F, V>(generator: F) -> Self
    where
        F: FnOnce() -> V + 'static,
        V: Into<ContextValue>,
    {
        Self::Lazy(Box::new(move || generator().into()))
    }

    /// Produces the final value, running the closure if there is one.
    #[inline]
    pub(crate) fn resolve(self) -> ContextValue {
        match self {
            Self::Ready(value) => value,
            Self::Lazy(generator) => generator(),
        }
    }
}

impl fmt::Debug for PendingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Lazy(_) => f.write_str("Lazy(<deferred>)"),
        }
    }
}

/// Insertion-ordered staging map with last-write-wins upserts.
#[derive(Debug, Default)]
pub(crate) struct PendingContext {
    entries: SmallVec<[(String, PendingValue); 4]>,
}

impl PendingContext {
    pub(crate) fn upsert(&mut self, key: String, value: PendingValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Runs every lazy entry once, in insertion order.
    pub(crate) fn resolve(self) -> ContextMap {
        self.entries.into_iter().map(|(key, value)| (key, value.resolve())).collect()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
