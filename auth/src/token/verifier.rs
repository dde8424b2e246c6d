use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Validates access tokens and extracts their claims.
///
/// A pure function of (token string, secret key, current time): no side
/// effects, no I/O. Signature comparison happens inside the HMAC
/// implementation and is constant-time.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier for HS256 tokens signed with `secret`.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock leeway: `exp <= now` must fail deterministically
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate `token` and return its claims.
    ///
    /// # Errors
    /// * `Malformed` - Not parseable into header, payload, and signature
    /// * `InvalidSignature` - Recomputed signature differs
    /// * `Expired` - `exp` is at or before the current time
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed,
                }
            })?;

        // The library treats `exp == now` as still valid; the contract here
        // is `exp <= now` fails
        if data.claims.is_expired(Utc::now().timestamp()) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use jsonwebtoken::encode;
    use jsonwebtoken::EncodingKey;
    use jsonwebtoken::Header;

    use super::*;
    use crate::token::issuer::TokenIssuer;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn sign(claims: &AccessClaims, secret: &[u8]) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .expect("Failed to encode token")
    }

    #[test]
    fn test_verify_fresh_token() {
        let issuer = TokenIssuer::new(SECRET, 30);
        let verifier = TokenVerifier::new(SECRET);

        let issued = issuer.issue("alice").expect("Failed to issue token");
        let claims = verifier.verify(&issued.token).expect("Failed to verify");

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims, issued.claims);
    }

    #[test]
    fn test_verify_expired_token() {
        let verifier = TokenVerifier::new(SECRET);

        // Issued 31 minutes ago with a 30 minute TTL
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "alice".to_string(),
            iat: now - 31 * 60,
            exp: now - 60,
        };

        let result = verifier.verify(&sign(&claims, SECRET));
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_expiry_boundary() {
        let verifier = TokenVerifier::new(SECRET);

        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "alice".to_string(),
            iat: now - 30 * 60,
            exp: now,
        };

        // exp == now is already expired
        let result = verifier.verify(&sign(&claims, SECRET));
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let issuer = TokenIssuer::new(SECRET, 30);
        let verifier = TokenVerifier::new(SECRET);

        let issued = issuer.issue("alice").expect("Failed to issue token");

        // Flip one character inside the signature segment
        let (prefix, signature) = issued.token.rsplit_once('.').unwrap();
        let mut altered = signature.to_string();
        let original = altered.remove(0);
        let replacement = if original == 'A' { 'B' } else { 'A' };
        altered.insert(0, replacement);

        let result = verifier.verify(&format!("{}.{}", prefix, altered));
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_wrong_secret() {
        let issuer = TokenIssuer::new(SECRET, 30);
        let verifier = TokenVerifier::new(b"different_secret_also_32_bytes_ok!");

        let issued = issuer.issue("alice").expect("Failed to issue token");

        let result = verifier.verify(&issued.token);
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_wrong_segment_count() {
        let verifier = TokenVerifier::new(SECRET);

        assert_eq!(verifier.verify("not.a"), Err(TokenError::Malformed));
        assert_eq!(verifier.verify(""), Err(TokenError::Malformed));
        assert_eq!(
            verifier.verify("four.part.token.here"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn test_verify_invalid_base64() {
        let verifier = TokenVerifier::new(SECRET);

        let result = verifier.verify("!!!.???.###");
        assert_eq!(result, Err(TokenError::Malformed));
    }

    #[test]
    fn test_verify_missing_sub_claim() {
        let verifier = TokenVerifier::new(SECRET);

        #[derive(serde::Serialize)]
        struct NoSubject {
            exp: i64,
        }

        let token = encode(
            &Header::new(Algorithm::HS256),
            &NoSubject {
                exp: Utc::now().timestamp() + 600,
            },
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to encode token");

        let result = verifier.verify(&token);
        assert_eq!(result, Err(TokenError::Malformed));
    }

    #[test]
    fn test_expired_wins_over_validity_window() {
        let issuer = TokenIssuer::new(SECRET, 30);
        let verifier = TokenVerifier::new(SECRET);

        // Fresh token stays valid for its whole window
        let issued = issuer.issue("alice").expect("Failed to issue token");
        assert!(!issued.claims.is_expired(Utc::now().timestamp()));
        assert!(issued
            .claims
            .is_expired(Utc::now().timestamp() + 31 * Duration::minutes(1).num_seconds()));
    }
}
