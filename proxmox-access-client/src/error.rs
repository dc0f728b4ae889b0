//! Unified error type for Proxmox VE API calls.

use thiserror::Error;

/// Error type for all client operations.
///
/// Transport variants keep the originating [`reqwest::Error`] as a chained
/// source. API-level variants carry the server's message verbatim so callers
/// can surface it without re-fetching.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, TLS handshake failure, broken response body).
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP request exceeded the client timeout.
    #[error("request timed out: {source}")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },

    /// The node rejected the credentials (HTTP 401), including failed
    /// ticket logins.
    #[error("authentication failed: {message}")]
    InvalidCredentials { message: String },

    /// The authenticated user lacks permission for the endpoint (HTTP 403).
    #[error("permission denied: {message}")]
    PermissionDenied { message: String },

    /// Any other non-success status from the API, with the server's status
    /// line or body message preserved.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to parse API response: {detail}")]
    Parse { detail: String },
}

impl ClientError {
    /// Whether this is expected behavior (bad credentials, missing resource)
    /// rather than an operational fault, for log-level selection.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidCredentials { .. } | Self::PermissionDenied { .. } => true,
            Self::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_credentials() {
        let e = ClientError::InvalidCredentials {
            message: "authentication failure".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "authentication failed: authentication failure"
        );
    }

    #[test]
    fn display_permission_denied() {
        let e = ClientError::PermissionDenied {
            message: "Permission check failed".to_string(),
        };
        assert_eq!(e.to_string(), "permission denied: Permission check failed");
    }

    #[test]
    fn display_api_error() {
        let e = ClientError::Api {
            status: 500,
            message: "domain 'nope' does not exist".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "API error (HTTP 500): domain 'nope' does not exist"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = ClientError::Parse {
            detail: "missing field `type`".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "failed to parse API response: missing field `type`"
        );
    }

    #[test]
    fn expected_auth_and_permission() {
        let auth = ClientError::InvalidCredentials {
            message: String::new(),
        };
        let perm = ClientError::PermissionDenied {
            message: String::new(),
        };
        assert!(auth.is_expected());
        assert!(perm.is_expected());
    }

    #[test]
    fn expected_client_side_api_error() {
        let e = ClientError::Api {
            status: 404,
            message: String::new(),
        };
        assert!(e.is_expected());
    }

    #[test]
    fn unexpected_server_side_api_error() {
        let e = ClientError::Api {
            status: 500,
            message: String::new(),
        };
        assert!(!e.is_expected());
    }

    #[test]
    fn unexpected_parse_error() {
        let e = ClientError::Parse {
            detail: String::new(),
        };
        assert!(!e.is_expected());
    }
}
