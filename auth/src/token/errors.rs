use thiserror::Error;

/// Error type for token operations.
///
/// The three verification variants are deliberately carried separately so
/// callers can log the specific failure, even though the wire response must
/// not distinguish them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The string cannot be parsed into header, payload, and signature.
    #[error("Token is malformed")]
    Malformed,

    /// The signature does not match the one recomputed over the payload.
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// The `exp` claim is at or before the current time.
    #[error("Token is expired")]
    Expired,

    /// Issuing-side failure while signing a new token.
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
