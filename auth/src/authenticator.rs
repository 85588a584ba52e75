use chrono::Utc;
use secrecy::SecretString;

use crate::jwt::TokenCodec;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Owns the signing secret for the lifetime of the process. Holds no other
/// state, so a single instance can be shared across request tasks.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with the default hashing cost.
    ///
    /// # Arguments
    /// * `secret` - Token signing secret
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: &SecretString) -> Result<Self, TokenError> {
        Self::with_hasher(secret, PasswordHasher::new())
    }

    /// Create a new authenticator with an explicitly configured password hasher.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn with_hasher(
        secret: &SecretString,
        password_hasher: PasswordHasher,
    ) -> Result<Self, TokenError> {
        Ok(Self {
            password_hasher,
            token_codec: TokenCodec::new(secret)?,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - Stored hash is unusable
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for `user_id`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Subject to bind into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.verify_password(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.generate_token(user_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification, for a freshly created account.
    ///
    /// # Errors
    /// * `TokenError` - Token generation failed
    pub fn generate_token(&self, user_id: i64) -> Result<String, TokenError> {
        self.token_codec.issue(user_id, Utc::now())
    }

    /// Verify a token against the current time and return its subject.
    ///
    /// # Errors
    /// * `TokenError` - Signature mismatch, expiry, or malformed token
    pub fn validate_token(&self, token: &str) -> Result<i64, TokenError> {
        self.token_codec.verify(token, Utc::now())
    }

    /// Underlying codec, for callers that need to supply their own clock.
    pub fn token_codec(&self) -> &TokenCodec {
        &self.token_codec
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn authenticator(secret: &str) -> Authenticator {
        Authenticator::with_hasher(
            &SecretString::from(secret.to_string()),
            PasswordHasher::with_params(8, 1, 1).unwrap(),
        )
        .expect("Failed to build authenticator")
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator("test_secret_key_at_least_32_bytes!");

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, 123)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let user_id = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(user_id, 123);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator("test_secret_key_at_least_32_bytes!");

        let hash = authenticator.hash_password("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, 123);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let authenticator = authenticator("test_secret_key_at_least_32_bytes!");

        let result = authenticator.authenticate("my_password", "not-a-phc-string", 123);
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }

    #[test]
    fn test_validate_token_issued_by_other_secret() {
        let issuer = authenticator("issuer_secret_key_at_least_32_bytes!");
        let verifier = authenticator("verifier_secret_key_at_least_32_bytes");

        let token = issuer.generate_token(5).unwrap();

        assert_eq!(
            verifier.validate_token(&token),
            Err(TokenError::InvalidSignature)
        );
    }

    #[test]
    fn test_validate_expired_token() {
        let authenticator = authenticator("test_secret_key_at_least_32_bytes!");

        let token = authenticator
            .token_codec()
            .issue(5, Utc::now() - Duration::hours(25))
            .unwrap();

        assert_eq!(
            authenticator.validate_token(&token),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_new_rejects_empty_secret() {
        let result = Authenticator::new(&SecretString::from(String::new()));
        assert!(matches!(result, Err(TokenError::MissingSecret)));
    }
}
