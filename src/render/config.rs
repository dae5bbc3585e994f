//! Layout settings for rendered views.

/// Configuration for [`Renderer`](super::Renderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Joins the sections of the full view.
    pub separator: String,
    /// Line introducing the frames in the debug view.
    pub stack_header: String,
    /// Prefix of every frame line in the debug view.
    pub frame_indent: String,
    /// `chrono` format string for the log view timestamp (always UTC).
    pub log_timestamp: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            separator: " | ".into(),
            stack_header: "Stack:".into(),
            frame_indent: "  ".into(),
            log_timestamp: "%Y-%m-%d %H:%M:%S%.3f".into(),
        }
    }
}

impl RenderConfig {
    /// One section per line.
    #[inline]
    pub fn multiline() -> Self {
        Self { separator: "\n".into(), ..Default::default() }
    }

    /// Semicolon-separated sections and unindented frames.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: "; ".into(), frame_indent: String::new(), ..Default::default() }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_log_timestamp(mut self, pattern: impl Into<String>) -> Self {
        self.log_timestamp = pattern.into();
        self
    }
}
