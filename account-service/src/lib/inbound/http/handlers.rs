use auth::PasswordError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod change_password;
pub mod current_user;
pub mod delete_account;
pub mod health;
pub mod login;
pub mod register;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

/// The one place account errors become HTTP statuses.
///
/// Server-side failures are logged here and answered with a generic message,
/// so hash, token and database details never reach the client.
impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => {
                ApiError::BadRequest(format!("Validation failed: {}", err))
            }
            UserError::InvalidRequest(_) => ApiError::BadRequest(err.to_string()),
            UserError::NotFound(_) => ApiError::NotFound("User not found".to_string()),
            UserError::NotFoundByEmail(_) => {
                ApiError::NotFound("Account with this email does not exist".to_string())
            }
            UserError::EmailAlreadyExists(_) => {
                ApiError::Conflict("Email is already registered".to_string())
            }
            UserError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            UserError::Token(ref token_err) if token_err.is_rejection() => {
                ApiError::Unauthorized("Invalid token".to_string())
            }
            UserError::Password(PasswordError::UnsupportedScheme(ref scheme)) => {
                tracing::warn!(scheme = %scheme, "Stored password hash uses an unsupported scheme");
                ApiError::Unauthorized(
                    "Stored credentials use an unsupported hash scheme".to_string(),
                )
            }
            UserError::Token(_) | UserError::Password(_) | UserError::DatabaseError(_) => {
                tracing::error!(error = %err, "Request failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        }
    }
}

/// Bodies that cannot be read as the expected JSON shape are validation
/// failures, answered inside the same envelope as every other error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
        ApiError::BadRequest(format!("Validation failed: {}", rejection.body_text()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Response data carrying a freshly issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
}

/// Response data carrying a confirmation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenError;

    use super::*;
    use crate::user::errors::EmailError;

    #[test]
    fn test_error_status_mapping() {
        let cases = vec![
            (
                UserError::EmailAlreadyExists("a@example.com".to_string()),
                StatusCode::CONFLICT,
            ),
            (UserError::NotFound("1".to_string()), StatusCode::NOT_FOUND),
            (
                UserError::NotFoundByEmail("a@example.com".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                UserError::InvalidRequest("same password".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::InvalidEmail(EmailError::InvalidFormat("x".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::DatabaseError("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::Password(PasswordError::HashingFailed("rng".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::Password(PasswordError::UnsupportedScheme("2a".to_string())),
                StatusCode::UNAUTHORIZED,
            ),
            (UserError::Token(TokenError::Expired), StatusCode::UNAUTHORIZED),
            (
                UserError::Token(TokenError::InvalidSignature),
                StatusCode::UNAUTHORIZED,
            ),
            (
                UserError::Token(TokenError::Malformed("bad".to_string())),
                StatusCode::UNAUTHORIZED,
            ),
            (
                UserError::Token(TokenError::EncodingFailed("bad".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = ApiError::from(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_internal_errors_are_not_leaked() {
        let err = ApiError::from(UserError::DatabaseError(
            "password_hash=$argon2id$secret".to_string(),
        ));

        assert_eq!(
            err,
            ApiError::InternalServerError("Internal server error".to_string())
        );
    }
}
