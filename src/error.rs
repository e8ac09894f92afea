//! Error types for the WakaTime client.
//!
//! Every failure surfaces to the caller unchanged. Nothing in this crate
//! retries or suppresses an error; deciding whether a failure is transient is
//! left to the caller.

use thiserror::Error;

use crate::context::ContextError;
use crate::transport::ApiResponse;

/// Main error type for the WakaTime client.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration, or a request executed without a context.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request body or query options could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The request method is not a valid HTTP token.
    #[error("Request error: {0}")]
    Request(String),

    /// The caller's context was cancelled or its deadline passed.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// Network-level failure reported by the HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside 200..=399.
    #[error("HTTP status error: {status}")]
    HttpStatus {
        status: u16,
        response: Box<ApiResponse>,
    },

    /// The response body does not match the expected JSON shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status code for `HttpStatus` errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The full response attached to an `HttpStatus` error.
    ///
    /// Headers such as rate-limit hints stay available even though the call
    /// failed.
    #[must_use]
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            Self::HttpStatus { response, .. } => Some(&**response),
            _ => None,
        }
    }

    /// Whether the call ended because the caller's context finished.
    #[must_use]
    pub fn is_context(&self) -> bool {
        matches!(self, Self::Context(_))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;

    use super::*;

    fn status_error(status: u16) -> Error {
        let response = ApiResponse::new(
            StatusCode::from_u16(status).expect("valid status"),
            HeaderMap::new(),
            "https://wakatime.com/api/v1/meta".parse().expect("valid url"),
            b"{}".to_vec(),
        );
        Error::HttpStatus {
            status,
            response: Box::new(response),
        }
    }

    #[test]
    fn test_http_status_accessors() {
        let error = status_error(429);

        assert_eq!(error.status(), Some(429));
        assert_eq!(error.response().map(|r| r.status().as_u16()), Some(429));
        assert!(!error.is_context());
        assert_eq!(error.to_string(), "HTTP status error: 429");
    }

    #[test]
    fn test_context_error_is_transparent() {
        let error = Error::from(ContextError::Canceled);

        assert!(error.is_context());
        assert_eq!(error.status(), None);
        assert_eq!(error.to_string(), "context canceled");
    }

    #[test]
    fn test_non_status_errors_have_no_response() {
        let error = Error::Request("invalid HTTP method".to_string());
        assert!(error.response().is_none());
        assert_eq!(error.to_string(), "Request error: invalid HTTP method");
    }
}
