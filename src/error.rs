//! Error handling for mattermost-messenger
//!
//! Every failure surfaces as [`Error`]. The [`ErrorKind`] discriminant
//! separates missing resources (HTTP 404) from everything else that can go
//! wrong while talking to the server, and `is_request_error` treats both as
//! request failures so callers can match on the broad class.

use std::error::Error as StdError;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Failure classes for Mattermost API calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request could not be completed: transport failure, timeout,
    /// unexpected status code, or an unreadable response body
    Request,
    /// The server answered 404 for the requested resource
    NotFound,
}

/// Error returned by every fallible operation in this crate
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status code if this error came from an HTTP response
    http_status: Option<u16>,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn request(message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::Request,
            message: message.into(),
            http_status: None,
            source: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::NotFound,
            message: message.into(),
            http_status: None,
            source: None,
        }
    }

    /// Add HTTP status code (builder pattern)
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Add the underlying cause (builder pattern)
    pub fn with_source(mut self, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the HTTP status code if available
    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// True for every error this crate produces, including not-found.
    ///
    /// A missing resource is still a failed request; callers that only care
    /// whether the call went through can match on this alone.
    pub fn is_request_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Request | ErrorKind::NotFound)
    }

    /// True only when the server answered 404
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_error<T: StdError + Send + Sync + 'static>(_: &T) {}

    #[test]
    fn test_error_creation() {
        let err = Error::request("Connection failed");
        assert_eq!(err.kind, ErrorKind::Request);
        assert_eq!(err.message, "Connection failed");
        assert_eq!(err.http_status(), None);
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_builder_pattern() {
        let err = Error::request("API request failed with status 500").with_http_status(500);
        assert_eq!(err.http_status(), Some(500));
        assert!(err.is_request_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_is_also_a_request_error() {
        let err = Error::not_found("resource not found");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.is_not_found());
        assert!(err.is_request_error());
    }

    #[test]
    fn test_error_display_uses_message() {
        let err = Error::request("GET request failed");
        assert_eq!(err.to_string(), "GET request failed");
    }

    #[test]
    fn test_error_source_chain() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::request("GET request failed").with_source(cause);
        let source = err.source().unwrap();
        assert!(source.to_string().contains("refused"));
    }

    #[test]
    fn test_error_is_send_sync() {
        let err = Error::not_found("resource not found");
        assert_error(&err);
    }
}
