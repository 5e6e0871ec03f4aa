use std::time::{Duration, Instant};
use tracing::info;

/// Logs how long a scope took when dropped.
pub struct LogDuration {
    operation: String,
    start: Instant,
}

impl LogDuration {
    pub fn new(operation: impl Into<String>) -> Self {
        LogDuration {
            operation: operation.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for LogDuration {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        info!(
            operation = %self.operation,
            elapsed_ms = elapsed.as_millis() as u64,
            "{}: {} ms",
            self.operation,
            elapsed.as_millis()
        );
    }
}

/// Times the rest of the enclosing scope.
#[macro_export]
macro_rules! log_duration {
    ($operation:expr) => {
        let _log_duration_guard = $crate::core::log_duration::LogDuration::new($operation);
    };
}
