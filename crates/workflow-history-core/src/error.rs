//! Retrieval error types.

use thiserror::Error;

/// Top-level error type for history retrieval.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The remote call could not be completed (connection refused, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote API answered with a non-success status.
    #[error("upstream returned status {status}: {message}")]
    Status {
        /// HTTP status code returned by the upstream API.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// A client could not be built from the supplied configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl HistoryError {
    /// Returns `true` for failures raised by the remote side or the network,
    /// as opposed to local configuration problems.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryError;

    #[test]
    fn test_status_error_message_includes_code_and_body() {
        let err = HistoryError::Status {
            status: 503,
            message: "unavailable".to_owned(),
        };

        assert_eq!(err.to_string(), "upstream returned status 503: unavailable");
    }

    #[test]
    fn test_config_error_is_not_remote() {
        assert!(!HistoryError::Config("bad url".into()).is_remote());
        assert!(HistoryError::Transport("connection refused".into()).is_remote());
        assert!(HistoryError::Decode("eof".into()).is_remote());
    }
}
