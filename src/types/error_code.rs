//! Opaque error identifiers.
//!
//! An [`ErrorCode`] is either textual or numeric. Equality and hashing take
//! the kind into account, so `"123"` and `123` are different codes.
//!
//! # Examples
//!
//! ```
//! use error_trail::ErrorCode;
//!
//! let text = ErrorCode::from("NOT_FOUND");
//! let number = ErrorCode::from(404);
//!
//! assert_eq!(text.to_string(), "NOT_FOUND");
//! assert_eq!(number.to_string(), "404");
//! assert_ne!(ErrorCode::from("123"), ErrorCode::from(123));
//! assert!(ErrorCode::EMPTY.is_empty());
//! ```
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error identifier holding exactly one of a text or an integer value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    /// Textual identifier such as `"DB_TIMEOUT"`.
    Text(Cow<'static, str>),
    /// Numeric identifier such as `404`.
    Number(i64),
}

impl ErrorCode {
    /// The canonical empty identifier carried by records built without a code.
    pub const EMPTY: ErrorCode = ErrorCode::Text(Cow::Borrowed(""));

    /// Creates a textual code.
    #[inline]
    pub fn text(code: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(code.into())
    }

    /// Creates a numeric code.
    #[inline]
    pub const fn number(code: i64) -> Self {
        Self::Number(code)
    }

    /// Returns `true` for the empty textual code.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Returns the textual value, if this is a textual code.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// Returns the numeric value, if this is a numeric code.
    #[inline]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

impl Default for ErrorCode {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&'static str> for ErrorCode {
    #[inline]
    fn from(code: &'static str) -> Self {
        Self::Text(Cow::Borrowed(code))
    }
}

impl From<String> for ErrorCode {
    #[inline]
    fn from(code: String) -> Self {
        Self::Text(Cow::Owned(code))
    }
}

impl From<Cow<'static, str>> for ErrorCode {
    #[inline]
    fn from(code: Cow<'static, str>) -> Self {
        Self::Text(code)
    }
}

/// A missing text coerces to the empty code.
impl From<Option<String>> for ErrorCode {
    #[inline]
    fn from(code: Option<String>) -> Self {
        code.map_or(Self::EMPTY, Self::from)
    }
}

impl From<Option<&'static str>> for ErrorCode {
    #[inline]
    fn from(code: Option<&'static str>) -> Self {
        code.map_or(Self::EMPTY, Self::from)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ErrorCode {
                #[inline]
                fn from(code: $ty) -> Self {
                    Self::Number(i64::from(code))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);
