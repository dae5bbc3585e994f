//! Typed context values and the insertion-ordered context map.
//!
//! Context attached to an [`ErrorRecord`](crate::ErrorRecord) is a small
//! closed set of renderable kinds. Anything else is captured through its
//! `Display` output with [`ContextValue::opaque`].
use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Serialize, Serializer};

/// A single context value.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// Explicitly absent value.
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    /// Nested map, boxed to keep the enum sized.
    Map(Box<ContextMap>),
    /// Rendered form of a value outside the closed set.
    Opaque(String),
}

impl ContextValue {
    /// Captures any displayable value as an opaque entry.
    #[inline]
    pub fn opaque(value: impl fmt::Display) -> Self {
        Self::Opaque(value.to_string())
    }

    /// Converts the value into its JSON representation.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Integer(i) => Value::Number((*i).into()),
            Self::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Self::Text(s) | Self::Opaque(s) => Value::String(s.clone()),
            Self::Timestamp(ts) => Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Map(map) => Value::Object(map.to_json()),
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) | Self::Opaque(s) => f.write_str(s),
            Self::Timestamp(ts) => f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Map(map) => write!(f, "{{{map}}}"),
        }
    }
}

impl From<&str> for ContextValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ContextValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ContextValue {
    #[inline]
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<bool> for ContextValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for ContextValue {
    #[inline]
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ContextValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<DateTime<Utc>> for ContextValue {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<ContextMap> for ContextValue {
    #[inline]
    fn from(value: ContextMap) -> Self {
        Self::Map(Box::new(value))
    }
}

impl<T> From<Option<T>> for ContextValue
where
    T: Into<ContextValue>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContextValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

/// Values outside the `i64` range are kept as their decimal text.
macro_rules! impl_from_wide_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ContextValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::Opaque(value.to_string()), Self::Integer)
                }
            }
        )*
    };
}

impl_from_wide_integer!(u64, usize, isize, i128, u128);

/// Insertion-ordered string-keyed map with last-write-wins upserts.
///
/// Overwriting a key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextMap {
    entries: SmallVec<[(String, ContextValue); 4]>,
}

impl ContextMap {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the value under `key`, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ContextValue>,
    ) -> Option<ContextValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Converts the map into a JSON object preserving insertion order.
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()
    }
}

/// Renders as `k=v, k=v`.
impl fmt::Display for ContextMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for ContextMap
where
    K: Into<String>,
    V: Into<ContextValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for ContextMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
