//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for tabsync
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum TabsyncError {
    /// Connection-level failure (connect error, timeout) after retries.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status after retries were exhausted. Carries the
    /// last status and raw response body; the status class is not
    /// interpreted further.
    #[error("Remote API error (status: {status}, body: {body})")]
    RemoteStatus {
        /// HTTP status code of the final attempt.
        status: u16,
        /// Raw response body text of the final attempt.
        body: String,
    },

    /// Response body did not match the expected wire shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A lookup-by-filter found no exact match.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Sign-in against the server failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for tabsync operations
pub type Result<T> = std::result::Result<T, TabsyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_serialize_with_type_tag() {
        let err = TabsyncError::NotFound("user with email 'a@x.com'".to_string());
        let json = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "user with email 'a@x.com'");
    }

    #[test]
    fn remote_status_keeps_status_and_body() {
        let err = TabsyncError::RemoteStatus { status: 409, body: "name in use".to_string() };
        let text = err.to_string();
        assert!(text.contains("409"));
        assert!(text.contains("name in use"));
    }
}
