use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

/// Principal resolved by [`authenticate`], stored in request extensions.
///
/// Handlers behind the gate take it with `Extension<AuthenticatedUser>`.
/// It lives only as long as the request it was attached to.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    user: User,
}

impl AuthenticatedUser {
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn id(&self) -> UserId {
        self.user.id
    }
}

/// Access gate for protected routes.
///
/// Rejects with 401 unless the request carries `Authorization: Bearer <token>`
/// with a valid token whose subject still exists. The store is only read.
pub async fn authenticate<S: UserServicePort>(
    State(state): State<AppState<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())?;

    let user_id = state.authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token verification failed");
        ApiError::Unauthorized("Invalid token".to_string())
    })?;

    let user = state
        .user_service
        .get_user(&UserId(user_id))
        .await
        .map_err(|e| {
            match e {
                UserError::NotFound(_) => {
                    tracing::warn!(user_id, "Token subject no longer exists")
                }
                other => {
                    tracing::error!(user_id, error = %other, "Failed to resolve token subject")
                }
            }
            ApiError::Unauthorized("User not found".to_string())
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user });

    Ok(next.run(req).await)
}

/// Extract the token from an `Authorization` header of exactly `Bearer <token>`.
fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers.get(AUTHORIZATION).ok_or_else(|| {
        ApiError::Unauthorized("Authorization header is required".to_string())
    })?;

    let invalid_format =
        || ApiError::Unauthorized("Invalid authorization header format".to_string());

    let auth_str = auth_header.to_str().map_err(|_| invalid_format())?;

    let mut parts = auth_str.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Ok(token),
        _ => Err(invalid_format()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_extract_missing_header() {
        assert!(matches!(
            extract_bearer_token(&HeaderMap::new()),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_extract_rejects_malformed_headers() {
        for value in [
            "Token abc",
            "bearer abc",
            "Bearer",
            "Bearer ",
            "Bearer abc def",
            "Bearer  abc",
            "abc",
        ] {
            assert!(
                extract_bearer_token(&headers(value)).is_err(),
                "accepted {:?}",
                value
            );
        }
    }
}
