use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures keep distinct kinds so callers can log and test them,
/// even though they all collapse to the same rejection at the HTTP boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}

impl TokenError {
    /// True for failures caused by the presented token rather than by the server.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::InvalidSignature | TokenError::Expired | TokenError::Malformed(_)
        )
    }
}
