//! Continuation tokens for paged history calls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque cursor returned by a paged API call.
///
/// The empty token doubles as "start of sequence" when sent and as "sequence
/// exhausted" when received. Tokens carry no ordering; only equality with the
/// empty sentinel is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// The empty sentinel used to request the first page.
    #[must_use]
    pub fn start() -> Self {
        Self(String::new())
    }

    /// Wraps a raw token string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns `true` when this token is the empty sentinel.
    ///
    /// Received from a response, this means no further pages exist.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Option<String>> for ContinuationToken {
    fn from(value: Option<String>) -> Self {
        Self(value.unwrap_or_default())
    }
}

impl From<&str> for ContinuationToken {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ContinuationToken;

    #[test]
    fn test_missing_token_normalizes_to_exhausted_sentinel() {
        let token = ContinuationToken::from(None);

        assert!(token.is_exhausted());
        assert_eq!(token, ContinuationToken::start());
    }

    #[test]
    fn test_non_empty_token_is_not_exhausted() {
        let token = ContinuationToken::from(Some("CiQKIDk".to_owned()));

        assert!(!token.is_exhausted());
        assert_eq!(token.as_str(), "CiQKIDk");
    }

    #[test]
    fn test_token_serializes_as_plain_string() {
        let json = serde_json::to_value(ContinuationToken::new("A")).unwrap();

        assert_eq!(json, serde_json::json!("A"));
    }
}
