//! Subtractive noise filter for captured call stacks.
//!
//! A frame is discarded when any of the following holds, checked in order:
//!
//! 1. its type path belongs to the host runtime, the standard library, the
//!    test harness or the stack capture machinery (or it is an unqualified
//!    native entry point such as `main` or `_start`);
//! 2. its type path belongs to this crate, unless it sits under a `tests`
//!    module;
//! 3. its method is a well-known dispatch shim (`call_once`, `run_test`, ...);
//! 4. its type or method name carries a compiler-synthesized marker such as
//!    `{{closure}}`.
//!
//! Surviving frames keep their original relative order.
use std::borrow::Cow;

use crate::stack::StackFrame;

/// Crate path prefixes of the host runtime and test harness.
pub const HOST_PREFIXES: &[&str] = &[
    "std::",
    "core::",
    "alloc::",
    "test::",
    "backtrace::",
    "rustc_demangle::",
    "panic_unwind::",
    "tokio::runtime::",
    "futures_executor::",
];

/// Crate path prefixes of this library.
pub const LIBRARY_PREFIXES: &[&str] = &["error_trail::"];

/// Method names used by closures, thread spawning and test dispatch.
pub const EXCLUDED_METHODS: &[&str] = &[
    "call",
    "call_mut",
    "call_once",
    "do_call",
    "try",
    "catch_unwind",
    "lang_start",
    "lang_start_internal",
    "run_test",
    "run_test_in_process",
    "__rust_begin_short_backtrace",
    "__rust_end_short_backtrace",
];

/// Markers rustc puts into the names of synthesized items.
pub const SYNTHESIZED_MARKERS: &[&str] =
    &["{{closure}}", "{{vtable.shim}}", "{{constant}}", "{{constructor}}", "{{opaque}}"];

/// The rule that rejected a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Host runtime, standard library, test harness or native entry point.
    Host,
    /// This crate's own frames outside `tests` modules.
    Library,
    /// Closure, thread or test dispatch shim such as `call_once`.
    Method,
    /// Compiler-synthesized item such as `{{closure}}`.
    Synthesized,
}

/// Configurable frame filter. [`FrameFilter::default`] carries the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFilter {
    host_prefixes: Vec<Cow<'static, str>>,
    library_prefixes: Vec<Cow<'static, str>>,
    excluded_methods: Vec<Cow<'static, str>>,
    synthesized_markers: Vec<Cow<'static, str>>,
}

impl Default for FrameFilter {
    fn default() -> Self {
        fn owned(list: &[&'static str]) -> Vec<Cow<'static, str>> {
            list.iter().copied().map(Cow::Borrowed).collect()
        }

        Self {
            host_prefixes: owned(HOST_PREFIXES),
            library_prefixes: owned(LIBRARY_PREFIXES),
            excluded_methods: owned(EXCLUDED_METHODS),
            synthesized_markers: owned(SYNTHESIZED_MARKERS),
        }
    }
}

impl FrameFilter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter that keeps every frame.
    pub fn keep_all() -> Self {
        Self {
            host_prefixes: Vec::new(),
            library_prefixes: Vec::new(),
            excluded_methods: Vec::new(),
            synthesized_markers: Vec::new(),
        }
    }

    /// Adds a host prefix, e.g. a framework crate whose frames are noise.
    #[must_use]
    pub fn exclude_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.host_prefixes.push(prefix.into());
        self
    }

    /// Adds an internal prefix whose `tests` modules stay visible.
    #[must_use]
    pub fn library_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.library_prefixes.push(prefix.into());
        self
    }

    #[must_use]
    pub fn exclude_method(mut self, method: impl Into<Cow<'static, str>>) -> Self {
        self.excluded_methods.push(method.into());
        self
    }

    #[must_use]
    pub fn exclude_marker(mut self, marker: impl Into<Cow<'static, str>>) -> Self {
        self.synthesized_markers.push(marker.into());
        self
    }

    /// Returns the first rule rejecting `frame`, or `None` if it survives.
    pub fn rejection(&self, frame: &StackFrame) -> Option<FilterRule> {
        let path = frame.type_name().trim_start_matches('<');
        let method = frame.method();

        if self.is_host(path) {
            return Some(FilterRule::Host);
        }
        if self.is_library(path) {
            return Some(FilterRule::Library);
        }
        if self.excluded_methods.iter().any(|m| m.as_ref() == method) {
            return Some(FilterRule::Method);
        }
        if self
            .synthesized_markers
            .iter()
            .any(|marker| method.contains(marker.as_ref()) || path.contains(marker.as_ref()))
        {
            return Some(FilterRule::Synthesized);
        }
        None
    }

    #[inline]
    pub fn keeps(&self, frame: &StackFrame) -> bool {
        self.rejection(frame).is_none()
    }

    /// Filters `frames`, preserving order.
    pub fn apply<I>(&self, frames: I) -> Vec<StackFrame>
    where
        I: IntoIterator<Item = StackFrame>,
    {
        frames.into_iter().filter(|frame| self.keeps(frame)).collect()
    }

    fn is_host(&self, path: &str) -> bool {
        // unqualified symbols are native entry points (`main`, `_start`, ...)
        path.is_empty() || self.host_prefixes.iter().any(|p| path.starts_with(p.as_ref()))
    }

    fn is_library(&self, path: &str) -> bool {
        self.library_prefixes.iter().any(|p| path.starts_with(p.as_ref())) && !in_tests_module(path)
    }
}

pub(crate) fn in_tests_module(path: &str) -> bool {
    path.split("::").any(|segment| segment == "tests")
}
