//! Failure type for backend calls.
//!
//! Every non-success HTTP status becomes [`ApiError::Status`] carrying the
//! numeric status and the backend's `detail` message, so callers branch on
//! [`ApiError::is_unauthorized`] instead of parsing error text.

use thiserror::Error;

/// A failed backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, timeout) or
    /// the response body could not be read or decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// An authentication failure synthesized client-side, e.g. when an
    /// operation requiring a token runs without one.
    pub fn unauthenticated() -> Self {
        ApiError::Status {
            status: 401,
            message: "Not authenticated".to_string(),
        }
    }

    /// The HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// True when the session should be considered invalid: the backend
    /// rejected the bearer token outright.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status {
            status: code,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn unauthorized_covers_401_and_403_only() {
        assert!(status(401).is_unauthorized());
        assert!(status(403).is_unauthorized());
        assert!(!status(404).is_unauthorized());
        assert!(!status(500).is_unauthorized());
        assert!(!status(200).is_unauthorized());
    }

    #[test]
    fn synthesized_unauthenticated_error_counts_as_unauthorized() {
        assert!(ApiError::unauthenticated().is_unauthorized());
        assert_eq!(ApiError::unauthenticated().status(), Some(401));
    }

    #[test]
    fn display_shows_the_backend_message() {
        assert_eq!(status(500).to_string(), "boom");
    }
}
