//! Error types for backend API operations.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Failure modes for a single backend request.
///
/// Callers in the state layer collapse all variants into a display string;
/// the distinction exists for logging and for tests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request did not complete (timeout, DNS, connection refused).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned HTTP {status}")]
    Http {
        /// The status code of the response.
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Returns `true` if the failure happened before a response arrived.
    #[must_use]
    #[allow(dead_code)] // Part of the error API
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns the HTTP status code, if the server produced one.
    #[must_use]
    #[allow(dead_code)] // Part of the error API
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(
            format!("{err}"),
            "server returned HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Http {
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
        assert!(!err.is_network());
    }
}
