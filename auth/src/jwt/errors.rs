use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures form a closed set so callers can match on the exact
/// reason a token was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is not active yet")]
    NotYetActive,

    #[error("Token is malformed or its signature is invalid: {0}")]
    Malformed(String),
}
