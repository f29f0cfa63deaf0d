//! Auth API endpoints.

use crate::auth::credentials::check_credentials;
use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{LoginRequest, LoginResponse, MessageResponse};
use crate::routes::json_body_error;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

/// POST /login — Exchange credentials for a bearer token
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = body.map_err(|e| {
        json_body_error(e, AppError::BadRequest("Invalid JSON body".to_string()))
    })?;

    // Non-string fields can never match the configured pair
    let (Some(username), Some(password)) = (req.username.as_str(), req.password.as_str()) else {
        tracing::warn!(action = "auth_failed", "Credentials are not strings");
        return Err(AppError::InvalidCredentials);
    };

    if !check_credentials(&state.config, username, password) {
        tracing::warn!(action = "auth_failed", username = %username, "Invalid credentials");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.sessions.create(username);

    tracing::info!(
        action = "auth_success",
        username = %username,
        live_sessions = state.sessions.len(),
        "User authenticated"
    );

    Ok(Json(LoginResponse { token }))
}

/// POST /logout — Invalidate current session
pub async fn logout(
    session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    state.sessions.revoke(&session.token);

    let session_age_secs = (Utc::now() - session.created_at).num_seconds();
    tracing::info!(
        action = "logout",
        identity = %session.identity,
        session_age_secs,
        "User logged out"
    );

    Ok(Json(MessageResponse {
        message: "Logged out".to_string(),
    }))
}
