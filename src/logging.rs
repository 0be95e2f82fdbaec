//! Request logging hooks
//!
//! The client announces every outgoing request through a [`RequestLogger`].
//! The default implementation forwards to the `tracing` facade; embedders
//! with their own log pipeline can inject a custom logger via
//! [`MattermostClient::with_logger`](crate::MattermostClient::with_logger).

/// Receives one line per outgoing HTTP request
pub trait RequestLogger: Send + Sync {
    fn info(&self, message: &str);
}

/// Default logger that emits `tracing` events at INFO level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl RequestLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct RecordingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl RequestLogger for RecordingLogger {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_logger_as_trait_object() {
        let recorder = Arc::new(RecordingLogger {
            lines: Mutex::new(Vec::new()),
        });
        let logger: Arc<dyn RequestLogger> = recorder.clone();
        logger.info("GET https://mattermost.example.com/api/v4/users/me");

        let lines = recorder.lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("GET "));
    }

    #[test]
    fn test_tracing_logger_is_silent_without_subscriber() {
        // No subscriber installed; the event is simply dropped.
        TracingLogger.info("POST https://mattermost.example.com/api/v4/posts");
    }
}
