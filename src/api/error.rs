//! Typed errors for the remote data gateway

use reqwest::StatusCode;
use thiserror::Error;

/// Errors reported by the backend gateway
///
/// `Network` covers transport-level failures (connect, DNS, timeout) and
/// unreadable response bodies. `Server` covers non-success HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("server returned status {0}")]
    Server(StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_reports_status() {
        let err = ApiError::Server(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let err = ApiError::Server(StatusCode::NOT_FOUND);
        assert!(matches!(err, ApiError::Server(status) if status == StatusCode::NOT_FOUND));
        assert!(!matches!(err, ApiError::Network(_)));
    }
}
