use thiserror::Error;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::AccessClaims;
use crate::token::IssuedToken;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenVerifier;

/// Minimum secret key length accepted at startup.
///
/// HS256 keys shorter than the digest size weaken forgery resistance; a
/// process configured below this refuses to serve.
pub const MIN_SECRET_BYTES: usize = 32;

/// Request-level authentication coordinator.
///
/// Combines the password hasher, token issuer, and token verifier behind the
/// two transitions a request can take: login (credentials in, token out) and
/// bearer (token in, subject out). The gate holds no per-request state;
/// every call is independent, and concurrent requests share only the
/// read-only signing key inside.
pub struct AuthGate {
    hasher: PasswordHasher,
    issuer: TokenIssuer,
    verifier: TokenVerifier,
}

/// Startup validation failure for the process secret key.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SecretKeyError {
    #[error("Secret key is empty")]
    Empty,

    #[error("Secret key too short: minimum {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },
}

/// Authentication failure.
///
/// `InvalidCredentials` deliberately carries no detail about whether the
/// identifier or the secret was wrong.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl AuthGate {
    /// Create a gate after validating the process secret key.
    ///
    /// # Arguments
    /// * `secret` - Process-wide signing key from configuration
    /// * `token_ttl_minutes` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `SecretKeyError` - Key is empty or shorter than [`MIN_SECRET_BYTES`]
    pub fn new(secret: &[u8], token_ttl_minutes: i64) -> Result<Self, SecretKeyError> {
        if secret.is_empty() {
            return Err(SecretKeyError::Empty);
        }
        if secret.len() < MIN_SECRET_BYTES {
            return Err(SecretKeyError::TooShort {
                min: MIN_SECRET_BYTES,
                actual: secret.len(),
            });
        }

        Ok(Self {
            hasher: PasswordHasher::new(),
            issuer: TokenIssuer::new(secret, token_ttl_minutes),
            verifier: TokenVerifier::new(secret),
        })
    }

    /// Hash a password for storage (registration, password change).
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.hasher.hash(password)
    }

    /// Login transition: verify credentials, mint a token.
    ///
    /// # Arguments
    /// * `subject` - Identifier the minted token will assert
    /// * `password` - Plaintext password presented by the caller
    /// * `stored_hash` - Credential hash from the user store
    ///
    /// # Returns
    /// The issued token and its claims
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash unreadable or hashing failed
    /// * `Token` - Signing failed
    pub fn login(
        &self,
        subject: &str,
        password: &str,
        stored_hash: &str,
    ) -> Result<IssuedToken, AuthError> {
        let matches = self.hasher.verify(password, stored_hash)?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.issuer.issue(subject)?)
    }

    /// Bearer transition: validate a presented token.
    ///
    /// On success the caller still has to resolve the subject against the
    /// user store before the request counts as authenticated.
    ///
    /// # Errors
    /// * `Malformed` / `InvalidSignature` / `Expired` - See [`TokenError`]
    pub fn verify_bearer(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.verifier.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_login_success() {
        let gate = AuthGate::new(SECRET, 30).expect("Failed to build gate");

        let hash = gate.hash_password("pass_word!").expect("Failed to hash");
        let issued = gate
            .login("alice", "pass_word!", &hash)
            .expect("Login failed");

        assert_eq!(issued.claims.sub, "alice");

        let claims = gate
            .verify_bearer(&issued.token)
            .expect("Token verification failed");
        assert_eq!(claims.sub, "alice");
    }

    #[test]
    fn test_login_wrong_password() {
        let gate = AuthGate::new(SECRET, 30).expect("Failed to build gate");

        let hash = gate.hash_password("right_password").expect("Failed to hash");
        let result = gate.login("alice", "wrong_password", &hash);

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_rejects_empty_secret() {
        assert_eq!(AuthGate::new(b"", 30).err(), Some(SecretKeyError::Empty));
    }

    #[test]
    fn test_rejects_short_secret() {
        let result = AuthGate::new(b"too-short", 30);
        assert_eq!(
            result.err(),
            Some(SecretKeyError::TooShort {
                min: MIN_SECRET_BYTES,
                actual: 9
            })
        );
    }

    #[test]
    fn test_verify_bearer_rejects_garbage() {
        let gate = AuthGate::new(SECRET, 30).expect("Failed to build gate");

        let result = gate.verify_bearer("invalid.token.here");
        assert!(matches!(result, Err(TokenError::InvalidSignature) | Err(TokenError::Malformed)));
    }
}
