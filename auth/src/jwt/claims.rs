use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Lifetime of every issued token.
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Identity token claims.
///
/// `user_id` and `exp` keep the claim names of tokens already in circulation,
/// so those tokens stay verifiable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (numeric user identifier)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Create claims for a user, expiring `TOKEN_LIFETIME_HOURS` after `now`.
    pub fn for_user(user_id: i64, now: DateTime<Utc>) -> Self {
        let expiration = now + Duration::hours(TOKEN_LIFETIME_HOURS);

        Self {
            user_id: Some(user_id),
            exp: expiration.timestamp(),
            iat: Some(now.timestamp()),
        }
    }

    /// Check if token is expired. A token is no longer valid at its `exp` second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }

    /// Extract the subject.
    ///
    /// # Errors
    /// * `Malformed` - Subject is absent or not a valid user identifier
    pub fn subject(&self) -> Result<i64, TokenError> {
        match self.user_id {
            Some(user_id) if user_id > 0 => Ok(user_id),
            Some(user_id) => Err(TokenError::Malformed(format!(
                "invalid subject identifier {}",
                user_id
            ))),
            None => Err(TokenError::Malformed("missing subject".to_string())),
        }
    }
}
