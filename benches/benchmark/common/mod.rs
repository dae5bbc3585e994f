use criterion::Criterion;
use std::fmt;
use std::time::Duration;

use error_trail::{ErrorBuilder, ErrorRecord};

/// Driver error with a nested source, as returned by lower layers.
#[derive(Debug)]
pub struct DriverError {
    pub message: String,
    pub source: Option<Box<DriverError>>,
}

impl DriverError {
    pub fn nested(depth: usize) -> Self {
        let root = Self { message: "socket closed".into(), source: None };
        (1..depth).fold(root, |inner, level| Self {
            message: format!("driver layer {level} failed"),
            source: Some(Box::new(inner)),
        })
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.source {
            Some(inner) => Some(inner.as_ref()),
            None => None,
        }
    }
}

pub fn sample_record() -> ErrorRecord {
    ErrorBuilder::with_code("DB_UNAVAILABLE")
        .in_domain("storage")
        .tags(["db", "retryable"])
        .with("host", "db-1.internal")
        .with("attempt", 3)
        .with("elapsed_ms", 1520.5)
        .public("The service is temporarily unavailable.")
        .cause(ErrorRecord::new("connection reset by peer"))
        .error("query failed")
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
