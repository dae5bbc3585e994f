//! User and tenant relation info attached to a record.
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::context_value::{ContextMap, ContextValue};

/// An identified party (user or tenant) with free-form attributes.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subject {
    id: String,
    attributes: ContextMap,
}

impl Subject {
    /// Creates a subject without attributes.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), attributes: ContextMap::new() }
    }

    /// Creates a subject with the given attributes.
    pub fn with_attributes<I, K, V>(id: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ContextValue>,
    {
        Self { id: id.into(), attributes: attributes.into_iter().collect() }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn attributes(&self) -> &ContextMap {
        &self.attributes
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)?;
        if !self.attributes.is_empty() {
            write!(f, " ({})", self.attributes)?;
        }
        Ok(())
    }
}
