use chrono::Duration;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// A freshly minted access token.
///
/// Holds both the compact serialized form handed to the client and the
/// claims it encodes. Immutable once issued.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact three-segment base64url string (header.payload.signature)
    pub token: String,

    /// The claims baked into `token`
    pub claims: AccessClaims,
}

/// Mints signed, time-limited access tokens.
///
/// Pure computation: tokens are self-contained and never tracked server-side,
/// so there is no revocation list. The TTL is fixed at construction; callers
/// cannot vary it per token.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer signing with HS256.
    ///
    /// # Arguments
    /// * `secret` - Process-wide secret key (validated by the caller)
    /// * `ttl_minutes` - Lifetime of every issued token
    pub fn new(secret: &[u8], ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            header: Header::new(Algorithm::HS256),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a token for `subject` expiring TTL from now.
    ///
    /// # Errors
    /// * `SigningFailed` - Serialization or signing failed
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let claims = AccessClaims::new(subject, self.ttl);

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))?;

        Ok(IssuedToken { token, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_compact_format() {
        let issuer = TokenIssuer::new(b"test_secret_key_at_least_32_bytes!", 30);

        let issued = issuer.issue("alice").expect("Failed to issue token");

        // header.payload.signature
        assert_eq!(issued.token.split('.').count(), 3);
        assert_eq!(issued.claims.sub, "alice");
    }

    #[test]
    fn test_issue_applies_fixed_ttl() {
        let issuer = TokenIssuer::new(b"test_secret_key_at_least_32_bytes!", 30);

        let issued = issuer.issue("alice").expect("Failed to issue token");

        assert_eq!(issued.claims.exp - issued.claims.iat, 30 * 60);
    }

    #[test]
    fn test_tokens_differ_per_subject() {
        let issuer = TokenIssuer::new(b"test_secret_key_at_least_32_bytes!", 30);

        let a = issuer.issue("alice").expect("Failed to issue token");
        let b = issuer.issue("bob").expect("Failed to issue token");

        assert_ne!(a.token, b.token);
    }
}
