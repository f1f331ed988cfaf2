use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::password_digest;
use crate::errors::AppError;
use crate::models::user::{Account, ProfileUpdate, UserRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: Uuid,
    pub user: Account,
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let email = req.email.trim().to_string();
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    if state.users.get_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict(
            "An account with this email already exists.".to_string(),
        ));
    }

    let user = UserRow::new(req.name.trim().to_string(), email, password_digest(&req.password));
    state.users.put(&user).await?;
    let token = state.sessions.create(user.id).await?;

    tracing::info!("registered user {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: Account::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .users
        .get_by_email(req.email.trim())
        .await?
        .ok_or(AppError::Unauthorized)?;

    if user.password_digest != password_digest(&req.password) {
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.create(user.id).await?;
    Ok(Json(AuthResponse {
        token,
        user: Account::from(&user),
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let token = bearer_token(&headers)?;
    state.sessions.revoke(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Account>, AppError> {
    let user = authenticate(&state, &headers).await?;
    Ok(Json(Account::from(&user)))
}

/// PUT /api/v1/profile
///
/// Read-modify-write of the profile fields; id, email, and password are
/// preserved from the stored record.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Account>, AppError> {
    let mut user = authenticate(&state, &headers).await?;
    user.apply(update);
    state.users.put(&user).await?;
    Ok(Json(Account::from(&user)))
}

/// Resolves the bearer token to the stored user record.
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<UserRow, AppError> {
    let token = bearer_token(headers)?;
    let user_id = state
        .sessions
        .user_for(token)
        .await?
        .ok_or(AppError::Unauthorized)?;
    state
        .users
        .get(user_id)
        .await?
        .ok_or(AppError::Unauthorized)
}

fn bearer_token(headers: &HeaderMap) -> Result<Uuid, AppError> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|v| Uuid::parse_str(v.trim()).ok())
        .ok_or(AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::AUTHORIZATION;

    #[test]
    fn test_bearer_token_parses() {
        let token = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        assert_eq!(bearer_token(&headers).unwrap(), token);
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(matches!(
            bearer_token(&headers),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_bearer_token_malformed_value() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer not-a-uuid".parse().unwrap());
        assert!(bearer_token(&headers).is_err());
    }
}
