use async_trait::async_trait;

use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::DeleteAccountCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for account service operations.
///
/// Every operation runs to completion or failure with at most one write to the
/// store, performed as its last step. Nothing is retried.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first token.
    ///
    /// # Arguments
    /// * `command` - Validated name, email, and password
    ///
    /// # Returns
    /// Signed access token for the new account
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered (nothing is written)
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Store lookup or write failed (no token is issued)
    /// * `Token` - Token issuance failed
    async fn register(&self, command: RegisterCommand) -> Result<String, UserError>;

    /// Exchange email and password for a token.
    ///
    /// # Returns
    /// Signed access token
    ///
    /// # Errors
    /// * `NotFoundByEmail` - No account with this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash is unusable
    /// * `DatabaseError` - Store lookup failed
    async fn login(&self, command: LoginCommand) -> Result<String, UserError>;

    /// Retrieve account by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_user(&self, id: &UserId) -> Result<User, UserError>;

    /// Replace the principal's password.
    ///
    /// # Arguments
    /// * `principal` - Authenticated user
    /// * `command` - Current and new password
    ///
    /// # Errors
    /// * `InvalidCredentials` - Current password does not match
    /// * `InvalidRequest` - New password equals the current one
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Write failed
    async fn change_password(
        &self,
        principal: &User,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError>;

    /// Hard-delete the principal's account.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `NotFound` - Account no longer exists
    /// * `DatabaseError` - Delete failed
    async fn delete_account(
        &self,
        principal: &User,
        command: DeleteAccountCommand,
    ) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Returns
    /// Created user entity with its assigned id
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `EmailAlreadyExists` - New email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Remove user from storage.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
