//! Shorthand for building records from format strings.

/// Creates an [`ErrorRecord`](crate::ErrorRecord) from a format string,
/// optionally seeded with a code.
///
/// # Examples
///
/// ```
/// use error_trail::fault;
///
/// let id = 42;
/// let plain = fault!("order {id} not found");
/// assert_eq!(plain.message(), "order 42 not found");
/// assert!(plain.code().is_empty());
///
/// let coded = fault!("ORDER_MISSING" => "order {} not found", id);
/// assert_eq!(coded.render("C"), "[ORDER_MISSING] order 42 not found");
/// ```
#[macro_export]
macro_rules! fault {
    ($code:expr => $($arg:tt)+) => {
        $crate::ErrorBuilder::with_code($code).error(format!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::ErrorRecord::new(format!($($arg)+))
    };
}
