//! Authentication core library
//!
//! Provides the pure-computation half of the authentication stack:
//! - Password hashing (Argon2id, salted per credential)
//! - Access token issuance and validation (HS256, fixed TTL)
//! - The per-request auth gate coordinating both
//!
//! Nothing in this crate performs I/O. Identity resolution against the user
//! store is the caller's responsibility and happens once per authenticated
//! request.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{TokenIssuer, TokenVerifier};
//!
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let issuer = TokenIssuer::new(secret, 30);
//! let verifier = TokenVerifier::new(secret);
//!
//! let issued = issuer.issue("alice").unwrap();
//! let claims = verifier.verify(&issued.token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```
//!
//! ## Complete Login Flow
//! ```
//! use auth::AuthGate;
//!
//! let gate = AuthGate::new(b"secret_key_at_least_32_bytes_long!", 30).unwrap();
//!
//! // Register: hash password
//! let hash = gate.hash_password("password123").unwrap();
//!
//! // Login: verify credentials and mint a token
//! let issued = gate.login("alice", "password123", &hash).unwrap();
//!
//! // Later: validate the bearer token and recover the subject
//! let claims = gate.verify_bearer(&issued.token).unwrap();
//! assert_eq!(claims.sub, "alice");
//! ```

pub mod gate;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use gate::AuthError;
pub use gate::AuthGate;
pub use gate::SecretKeyError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::IssuedToken;
pub use token::TokenError;
pub use token::TokenIssuer;
pub use token::TokenVerifier;
