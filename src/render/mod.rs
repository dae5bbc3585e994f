//! Textual and JSON views of an [`ErrorRecord`].
//!
//! Rendering is a pure function of a record and a [`Format`]. The string
//! entry point [`render`] accepts the short or long token of each view and
//! falls back to the primary message for anything it does not recognise.
//!
//! | Token | View |
//! |-------|------|
//! | `F` / `FULL` | `[code] message` plus domain, tags, context and cause message |
//! | `C` / `CODE` | `[code] message` |
//! | `D` / `DEBUG` | full view, then the filtered stack |
//! | `J` / `JSON` | JSON object |
//! | `P` / `PUBLIC` | public message, else the primary message |
//! | `L` / `LOG` | `yyyy-MM-dd HH:mm:ss.fff [code] message` (UTC) |
//!
//! # Examples
//!
//! ```
//! use error_trail::{render, ErrorBuilder};
//!
//! let err = ErrorBuilder::with_code("E42")
//!     .in_domain("io")
//!     .with("path", "/tmp/x")
//!     .error("write failed");
//!
//! assert_eq!(render(&err, "C"), "[E42] write failed");
//! assert_eq!(render(&err, "F"), "[E42] write failed | Domain: io | Context: path=/tmp/x");
//! assert_eq!(render(&err, "nope"), "write failed");
//! ```
use core::fmt::{self, Write};
use core::str::FromStr;

use crate::types::ErrorRecord;

pub mod config;
mod json;

pub use config::RenderConfig;

/// A rendered view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Full,
    Code,
    Debug,
    Json,
    Public,
    Log,
}

impl Format {
    /// Parses a token case-insensitively, returning `None` when unknown.
    pub fn from_token(token: &str) -> Option<Self> {
        let format = match token.trim().to_ascii_uppercase().as_str() {
            "F" | "FULL" => Self::Full,
            "C" | "CODE" => Self::Code,
            "D" | "DEBUG" => Self::Debug,
            "J" | "JSON" => Self::Json,
            "P" | "PUBLIC" => Self::Public,
            "L" | "LOG" => Self::Log,
            _ => return None,
        };
        Some(format)
    }

    /// The long token of this view.
    pub fn token(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Code => "CODE",
            Self::Debug => "DEBUG",
            Self::Json => "JSON",
            Self::Public => "PUBLIC",
            Self::Log => "LOG",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing an unknown format token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format token `{}`", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

/// Renders `record` for `token` with the default layout.
#[must_use]
pub fn render(record: &ErrorRecord, token: &str) -> String {
    Renderer::default().render_token(record, token)
}

/// Stateless renderer carrying layout settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[inline]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders for a token, falling back to the primary message.
    pub fn render_token(&self, record: &ErrorRecord, token: &str) -> String {
        match Format::from_token(token) {
            Some(format) => self.render(record, format),
            None => record.message().to_owned(),
        }
    }

    pub fn render(&self, record: &ErrorRecord, format: Format) -> String {
        match format {
            Format::Full => self.full(record),
            Format::Code => code_line(record),
            Format::Debug => self.debug(record),
            Format::Json => json::to_json(record).to_string(),
            Format::Public => record.public_message().unwrap_or(record.message()).to_owned(),
            Format::Log => self.log(record),
        }
    }

    fn full(&self, record: &ErrorRecord) -> String {
        let mut sections = vec![code_line(record)];
        if let Some(domain) = record.domain() {
            sections.push(format!("Domain: {domain}"));
        }
        if !record.tags().is_empty() {
            sections.push(format!("Tags: {}", record.tags().join(", ")));
        }
        if !record.context().is_empty() {
            sections.push(format!("Context: {}", record.context()));
        }
        if let Some(cause) = record.cause() {
            sections.push(format!("Caused by: {}", cause.message()));
        }
        sections.join(&self.config.separator)
    }

    fn debug(&self, record: &ErrorRecord) -> String {
        let mut out = self.full(record);
        out.push('\n');
        out.push_str(&self.config.stack_header);
        for frame in record.stack() {
            let _ = write!(out, "\n{}{frame}", self.config.frame_indent);
        }
        out
    }

    fn log(&self, record: &ErrorRecord) -> String {
        let mut out = String::new();
        let timestamp = record.timestamp();
        if write!(out, "{}", timestamp.format(&self.config.log_timestamp)).is_err() {
            // invalid user pattern
            out.clear();
            let _ = write!(out, "{}", timestamp.format("%Y-%m-%d %H:%M:%S%.3f"));
        }
        let _ = write!(out, " [{}] {}", record.code(), record.message());
        out
    }
}

fn code_line(record: &ErrorRecord) -> String {
    format!("[{}] {}", record.code(), record.message())
}
