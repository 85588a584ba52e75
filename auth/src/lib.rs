//! Authentication utilities library
//!
//! Provides the credential and token primitives of the account service:
//! - Password hashing (Argon2id, tunable work factor)
//! - Signed identity tokens (HS256 JWT, 24 hour lifetime)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Utc;
//! use secrecy::SecretString;
//!
//! let codec = TokenCodec::new(&SecretString::from("secret_key_at_least_32_bytes_long!".to_string())).unwrap();
//! let now = Utc::now();
//! let token = codec.issue(42, now).unwrap();
//! assert_eq!(codec.verify(&token, now).unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use secrecy::SecretString;
//!
//! let auth = Authenticator::new(&SecretString::from("secret_key_at_least_32_bytes_long!".to_string())).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate("password123", &hash, 42).unwrap();
//!
//! // Validate token
//! let user_id = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(user_id, 42);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::TokenCodec;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
