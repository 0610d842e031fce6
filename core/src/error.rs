//! Gateway Error Types
//!
//! The two failure kinds a resource fetch can surface. The gateway never
//! swallows an error: every failed operation reports exactly one of these
//! to its caller, and the orchestrator is the sole recovery boundary.

use thiserror::Error;

/// Errors surfaced by [`ResourceGateway`](crate::gateway::ResourceGateway)
/// operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure: connection refused, timeout, or a response
    /// body that could not be decoded. No usable response was received.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A response was received, but its status was outside the success range.
    #[error("server returned HTTP {status}")]
    Http {
        /// The non-success HTTP status code
        status: u16,
    },
}

impl GatewayError {
    /// The HTTP status code, if this is an [`GatewayError::Http`] failure.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_includes_status() {
        let err = GatewayError::Http { status: 503 };
        assert_eq!(err.to_string(), "server returned HTTP 503");
        assert_eq!(err.status(), Some(503));
    }
}
