use std::error::Error as StdError;
use thiserror::Error;

/// Result type alias for Grafana API operations
pub type Result<T> = std::result::Result<T, GrafanaError>;

/// Errors that can occur when interacting with the Grafana API
#[derive(Debug, Error)]
pub enum GrafanaError {
    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// Request path could not be joined onto the configured base URL
    #[error("Invalid request path {path}: {source}")]
    InvalidPath {
        /// The offending relative path
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP request failed before a response was received
    /// (DNS, connection refused, timeout, cancellation)
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// Failed to serialize the request body
    ///
    /// Surfaced before any network call is attempted.
    #[error("Failed to serialize request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Grafana returned a 2xx response whose body could not be decoded
    #[error("Failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Raw response body, kept for diagnosis
        body: String,
    },

    /// Grafana rejected the request with a non-2xx status
    #[error("Grafana API error: HTTP {status} - {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, often a JSON error envelope
        body: String,
    },

    /// A listing was fetched successfully but contained no entry with the
    /// requested UID
    #[error("Contact point with uid {uid} not found")]
    ContactPointNotFound { uid: String },
}

impl GrafanaError {
    /// Check if the error is retryable
    ///
    /// Returns `true` for:
    /// - Network/connection errors
    /// - Timeout errors
    /// - Server errors (5xx status codes)
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(source) => {
                if let Some(reqwest_err) = StdError::source(source) {
                    if let Some(err) = reqwest_err.downcast_ref::<reqwest::Error>() {
                        return err.is_connect() || err.is_timeout();
                    }
                }
                false
            }
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_retryable_5xx() {
        let error = GrafanaError::Api {
            status: 500,
            body: "Internal server error".to_string(),
        };
        assert!(error.is_retryable());

        let error = GrafanaError::Api {
            status: 502,
            body: "Bad gateway".to_string(),
        };
        assert!(error.is_retryable());

        let error = GrafanaError::Api {
            status: 503,
            body: "Service unavailable".to_string(),
        };
        assert!(error.is_retryable());
    }

    #[test]
    fn test_api_error_not_retryable_4xx() {
        let error = GrafanaError::Api {
            status: 400,
            body: "Bad request".to_string(),
        };
        assert!(!error.is_retryable());

        let error = GrafanaError::Api {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert!(!error.is_retryable());

        let error = GrafanaError::Api {
            status: 404,
            body: "Not found".to_string(),
        };
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_error_display() {
        let error = GrafanaError::Api {
            status: 500,
            body: "Internal server error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Grafana API error: HTTP 500 - Internal server error"
        );
    }

    #[test]
    fn test_encode_error_not_retryable() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let error = GrafanaError::Encode(json_err);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let body = "<html>not json</html>".to_string();
        let source = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();
        let error = GrafanaError::Decode {
            source,
            body: body.clone(),
        };
        assert!(!error.is_retryable());
        if let GrafanaError::Decode { body: kept, .. } = error {
            assert_eq!(kept, body);
        } else {
            unreachable!();
        }
    }
}
