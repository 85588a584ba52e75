use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::ChangePasswordCommand;
use crate::domain::user::models::DeleteAccountCommand;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for account operations.
///
/// Stateless over the injected repository; credential and token work is
/// delegated to the shared `Authenticator`.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token codec
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn verify_principal_password(
        &self,
        principal: &User,
        password: &str,
    ) -> Result<(), UserError> {
        if self
            .authenticator
            .verify_password(password, &principal.password_hash)?
        {
            Ok(())
        } else {
            Err(UserError::InvalidCredentials)
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<String, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let password_hash = self
            .authenticator
            .hash_password(command.password.expose())?;

        let user = self
            .repository
            .create(NewUser {
                name: command.name,
                email: command.email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(self.authenticator.generate_token(user.id.0)?)
    }

    async fn login(&self, command: LoginCommand) -> Result<String, UserError> {
        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| UserError::NotFoundByEmail(command.email.to_string()))?;

        let result = self.authenticator.authenticate(
            command.password.expose(),
            &user.password_hash,
            user.id.0,
        )?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(result.access_token)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn change_password(
        &self,
        principal: &User,
        command: ChangePasswordCommand,
    ) -> Result<(), UserError> {
        self.verify_principal_password(principal, command.old_password.expose())?;

        if command.old_password == command.new_password {
            return Err(UserError::InvalidRequest(
                "New password must differ from the current password".to_string(),
            ));
        }

        let mut user = principal.clone();
        user.password_hash = self
            .authenticator
            .hash_password(command.new_password.expose())?;
        user.updated_at = Utc::now();

        self.repository.update(user).await?;

        tracing::info!(user_id = %principal.id, "Password changed");

        Ok(())
    }

    async fn delete_account(
        &self,
        principal: &User,
        command: DeleteAccountCommand,
    ) -> Result<(), UserError> {
        self.verify_principal_password(principal, command.password.expose())?;

        self.repository.delete(&principal.id).await?;

        tracing::info!(user_id = %principal.id, "Account deleted");

        Ok(())
    }
}
