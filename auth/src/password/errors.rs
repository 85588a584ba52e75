use thiserror::Error;

/// Error type for password operations.
///
/// A mismatching password is not an error; these variants only cover
/// infrastructure failures and unusable stored hashes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),

    #[error("Invalid hashing parameters: {0}")]
    InvalidParameters(String),

    /// Stored hash was produced by another scheme (for example bcrypt).
    #[error("Unsupported password hash scheme: {0}")]
    UnsupportedScheme(String),
}
