//! Call-site stack capture.
//!
//! [`StackTrace::capture`] walks the active call stack, resolves every frame
//! (inlined functions become frames of their own), drops the capture
//! machinery and library plumbing, skips a caller-chosen number of innermost
//! frames and runs the remainder through a [`FrameFilter`].
//!
//! Capture requires the `stack` feature; without it every trace is empty.
//!
//! # Examples
//!
//! ```
//! use error_trail::stack::{FrameFilter, StackTrace};
//!
//! let trace = StackTrace::capture(0, &FrameFilter::default());
//! for frame in trace.iter() {
//!     println!("{frame}");
//! }
//! ```
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod filter;

pub use filter::{FilterRule, FrameFilter};

/// One resolved, filtered stack frame.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    type_name: String,
    method: String,
    file: Option<String>,
    line: Option<u32>,
}

impl StackFrame {
    pub fn new(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), method: method.into(), file: None, line: None }
    }

    /// Attaches a source location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: Option<u32>) -> Self {
        self.file = Some(file.into());
        self.line = line;
        self
    }

    /// Builds a frame from a demangled symbol path such as
    /// `my_app::db::Pool<T>::connect`.
    pub fn from_symbol(symbol: &str, file: Option<String>, line: Option<u32>) -> Self {
        let (type_name, method) = split_symbol(strip_hash(symbol));
        Self { type_name: type_name.to_owned(), method: method.to_owned(), file, line }
    }

    /// Module or type path declaring the function; empty for native symbols.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    #[inline]
    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

/// Renders as `at path::method() in file:line`, without the location when
/// it was not resolved.
impl fmt::Display for StackFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("at ")?;
        if !self.type_name.is_empty() {
            write!(f, "{}::", self.type_name)?;
        }
        write!(f, "{}()", self.method)?;
        if let Some(file) = &self.file {
            write!(f, " in {file}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        Ok(())
    }
}

/// Ordered filtered frames, innermost first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackTrace {
    frames: Vec<StackFrame>,
}

impl StackTrace {
    /// An empty trace.
    #[inline]
    pub const fn empty() -> Self {
        Self { frames: Vec::new() }
    }

    /// Wraps already-filtered frames.
    #[inline]
    pub fn from_frames(frames: Vec<StackFrame>) -> Self {
        Self { frames }
    }

    /// Captures the current call stack.
    ///
    /// The innermost run of capture machinery, library plumbing and frames
    /// `filter` rejects is dropped first, so counting starts at the caller's
    /// call site; then `skip` further frames are dropped; then `filter` runs
    /// over the rest.
    #[inline(never)]
    pub fn capture(skip: usize, filter: &FrameFilter) -> Self {
        let raw = raw_frames();
        let total = raw.len();
        let frames = filter.apply(
            raw.into_iter()
                .skip_while(|frame| is_capture_machinery(frame) || !filter.keeps(frame))
                .skip(skip),
        );

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "error_trail::stack",
            kept = frames.len(),
            discarded = total - frames.len(),
            "captured call stack"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = total;

        Self { frames }
    }

    #[inline]
    pub fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, StackFrame> {
        self.frames.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// One frame per line.
impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{frame}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a StackFrame;
    type IntoIter = std::slice::Iter<'a, StackFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(feature = "stack")]
#[inline(never)]
fn raw_frames() -> Vec<StackFrame> {
    let mut frames = Vec::new();
    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if let Some(name) = symbol.name() {
                frames.push(StackFrame::from_symbol(
                    &format!("{name:#}"),
                    symbol.filename().map(|path| path.display().to_string()),
                    symbol.lineno(),
                ));
            }
        });
        true
    });
    frames
}

#[cfg(not(feature = "stack"))]
fn raw_frames() -> Vec<StackFrame> {
    Vec::new()
}

/// Frames of the unwinder, the capture crate and this library, which `skip`
/// must not count even under a filter that keeps everything.
fn is_capture_machinery(frame: &StackFrame) -> bool {
    let path = frame.type_name().trim_start_matches('<');
    path.is_empty()
        || path.starts_with("backtrace::")
        || path.contains(" as error_trail::")
        || (path.starts_with("error_trail::") && !filter::in_tests_module(path))
}

/// Drops a trailing `::h0123456789abcdef` legacy-mangling hash.
fn strip_hash(symbol: &str) -> &str {
    match symbol.rsplit_once("::") {
        Some((head, hash))
            if hash.len() == 17
                && hash.starts_with('h')
                && hash[1..].bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            head
        }
        _ => symbol,
    }
}

/// Splits a symbol path at its last `::` outside generic brackets.
fn split_symbol(symbol: &str) -> (&str, &str) {
    let bytes = symbol.as_bytes();
    let mut depth = 0usize;
    let mut split = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // `->` inside fn-pointer types is not a closing bracket
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                split = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    match split {
        Some(at) => (&symbol[..at], &symbol[at + 2..]),
        None => ("", symbol),
    }
}
