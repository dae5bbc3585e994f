use core::fmt;

use super::ErrorRecord;
use crate::render::Format;

/// `{}` prints the primary message, `{:#}` the full view.
impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f.write_str(&self.render_as(Format::Full));
        }
        f.write_str(self.message())
    }
}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, f)
    }
}

impl std::error::Error for ErrorRecord {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause().map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Identity comparison; see [`ErrorRecord::same_message`] for text comparison.
impl PartialEq for ErrorRecord {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ErrorRecord {}

impl From<&str> for ErrorRecord {
    #[inline(never)]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ErrorRecord {
    #[inline(never)]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
