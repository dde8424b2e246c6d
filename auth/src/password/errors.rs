use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is NOT an error: `verify` reports a mismatch as
/// `Ok(false)`. These variants cover operational failures only.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is not a valid PHC string: {0}")]
    MalformedHash(String),
}
