//! Error types for Cal.com API operations.
//!
//! Every non-2xx response and every transport failure is mapped to exactly
//! one [`CalError`] variant inside the request engine; callers only branch
//! on the variant, they never re-interpret status codes.

use thiserror::Error;

/// A specialized Result type for Cal.com API operations.
pub type CalResult<T> = Result<T, CalError>;

/// An error returned by the Cal.com API client.
#[derive(Debug, Error)]
pub enum CalError {
    /// The request was rejected as invalid (HTTP 400).
    #[error("validation failed: {message}")]
    Validation {
        /// Message from the API error envelope.
        message: String,
        /// Structured validation details, when the envelope carries them.
        details: Option<serde_json::Value>,
    },

    /// Authentication or authorization failed (HTTP 401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The requested resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded (HTTP 429).
    #[error("rate limit exceeded: {message}")]
    RateLimited {
        /// Message from the API error envelope.
        message: String,
        /// Seconds to wait, from the `Retry-After` header when present.
        retry_after: Option<u64>,
    },

    /// The API reported an upstream failure (HTTP 500/502/503/504).
    #[error("server error ({status}): {message}")]
    Server {
        /// The HTTP status code.
        status: u16,
        /// Message from the API error envelope.
        message: String,
    },

    /// Any other non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// Message from the API error envelope.
        message: String,
    },

    /// The request never completed: timeout, connection failure, DNS
    /// failure or another transport fault.
    #[error("network error: {0}")]
    Network(String),

    /// The API returned a success status but the body could not be
    /// decoded into the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Local configuration problem: missing credentials, a malformed base
    /// URL, or an API that requires a different auth variant.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CalError {
    /// Returns true if the request that produced this error may be retried.
    ///
    /// Only transport faults and upstream 5xx failures are retry-eligible;
    /// validation, auth, not-found and rate-limit outcomes would not change
    /// on replay (429 carries `retry_after` for the caller to honor).
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Server { .. })
    }

    /// Returns the HTTP status code associated with this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Http { status, .. } => Some(*status),
            Self::Validation { .. } => Some(400),
            Self::NotFound(_) => Some(404),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_variants() {
        assert!(CalError::Network("connection refused".into()).is_retryable());
        assert!(
            CalError::Server {
                status: 503,
                message: "unavailable".into()
            }
            .is_retryable()
        );

        assert!(
            !CalError::Validation {
                message: "bad input".into(),
                details: None
            }
            .is_retryable()
        );
        assert!(!CalError::Auth("expired".into()).is_retryable());
        assert!(!CalError::NotFound("no such booking".into()).is_retryable());
        assert!(
            !CalError::RateLimited {
                message: "slow down".into(),
                retry_after: Some(5)
            }
            .is_retryable()
        );
        assert!(
            !CalError::Http {
                status: 418,
                message: "teapot".into()
            }
            .is_retryable()
        );
        assert!(!CalError::InvalidResponse("not json".into()).is_retryable());
        assert!(!CalError::Config("no credentials".into()).is_retryable());
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            CalError::Server {
                status: 502,
                message: "bad gateway".into()
            }
            .status(),
            Some(502)
        );
        assert_eq!(
            CalError::Validation {
                message: "x".into(),
                details: None
            }
            .status(),
            Some(400)
        );
        assert_eq!(CalError::Network("timeout".into()).status(), None);
    }

    #[test]
    fn display_includes_message() {
        let err = CalError::RateLimited {
            message: "too many requests".into(),
            retry_after: Some(5),
        };
        assert!(err.to_string().contains("too many requests"));

        let err = CalError::Server {
            status: 500,
            message: "boom".into(),
        };
        let display = err.to_string();
        assert!(display.contains("500"));
        assert!(display.contains("boom"));
    }
}
