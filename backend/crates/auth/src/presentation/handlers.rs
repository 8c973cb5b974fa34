//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::bearer::extract_bearer_token;

use crate::application::config::AuthConfig;
use crate::application::{
    LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase, ResolveViewerUseCase,
};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, RegisterRequest, UserDto};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            user_name: req.user_name,
            password: req.password,
        })
        .await?;

    let body = AuthResponse {
        token: output.token,
        user: UserDto::from_user(&output.user),
    };

    Ok((StatusCode::CREATED, Json(body)))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthResponse {
        token: output.token,
        user: UserDto::from_user(&output.user),
    }))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<StatusCode>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_bearer_token(&headers) {
        let use_case = LogoutUseCase::new(state.repo.clone());
        use_case.execute(&token).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Me
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserDto>>
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).ok_or(AuthError::SessionInvalid)?;

    let use_case = ResolveViewerUseCase::new(state.repo.clone(), state.repo.clone());
    let user = use_case
        .execute(&token)
        .await?
        .ok_or(AuthError::SessionInvalid)?;

    Ok(Json(UserDto::from_user(&user)))
}
