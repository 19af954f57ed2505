//! Error types for the scoring transport.

use thiserror::Error;

/// Generic user-facing message for any failed scoring exchange.
///
/// The UI contract collapses every transport failure to this single string;
/// the variant carrying the actual cause is kept for diagnostics.
pub const PREDICTION_FAILED_MESSAGE: &str = "Failed to get prediction";

/// Errors that can occur during a scoring exchange.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Network request failed (connectivity, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("scoring endpoint returned HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it could be read.
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// The response parsed but carries no numeric `mental_wellness_index`.
    #[error("response is missing a numeric mental_wellness_index field")]
    MissingIndex,
}

impl ClientError {
    /// Returns the user-facing message for this failure.
    ///
    /// Always [`PREDICTION_FAILED_MESSAGE`]: the presentation layer shows one
    /// generic message regardless of cause, per the form's UI contract.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        PREDICTION_FAILED_MESSAGE
    }

    /// Returns true when the endpoint answered but violated the expected
    /// response shape. Identical to any other failure for the user, but
    /// worth distinguishing in diagnostics.
    #[must_use]
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::MissingIndex)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParse(err.to_string())
    }
}

/// Result type alias for transport operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_generic_for_every_variant() {
        let errors = [
            ClientError::Network("connection refused".to_string()),
            ClientError::Status {
                status: 500,
                message: "internal error".to_string(),
            },
            ClientError::JsonParse("expected value".to_string()),
            ClientError::MissingIndex,
        ];
        for error in errors {
            assert_eq!(error.user_message(), PREDICTION_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_protocol_violations_are_distinguishable() {
        assert!(ClientError::MissingIndex.is_protocol_violation());
        assert!(ClientError::JsonParse("bad".to_string()).is_protocol_violation());
        assert!(!ClientError::Network("down".to_string()).is_protocol_violation());
        assert!(
            !ClientError::Status {
                status: 502,
                message: String::new()
            }
            .is_protocol_violation()
        );
    }
}
