use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Payload of an access token.
///
/// Carries exactly the claims this wire format needs: the subject the token
/// asserts ownership of, when it was issued, and when it stops being valid.
/// `exp` is always `iat` plus the issuer's fixed TTL; a token is never
/// renewed in place, only reissued.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (the identifier the token asserts, e.g. a username)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Build claims for a subject expiring `ttl` from now.
    pub fn new(subject: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Whether the token is expired at `now` (Unix timestamp).
    ///
    /// A token expiring exactly at `now` counts as expired.
    pub fn is_expired(&self, now: i64) -> bool {
        self.exp <= now
    }
}
