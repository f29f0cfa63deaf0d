//! Shared state and the authentication extractor.

use crate::config::Config;
use crate::error::AppError;
use crate::storage::{Ledger, SessionStore};
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub ledger: Arc<Ledger>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Fresh state: no sessions, zero balance.
    pub fn new(config: Config) -> Self {
        AppState {
            sessions: Arc::new(SessionStore::new()),
            ledger: Arc::new(Ledger::new()),
            config: Arc::new(config),
        }
    }
}

/// Authenticated session extractor.
///
/// Extracts session from `Authorization: Bearer {token}` header.
/// Missing header is `Unauthorized`; anything present that does not resolve
/// to a live session (including non-ASCII header bytes) is `InvalidToken`.
/// Both are 401.
#[derive(Debug)]
pub struct AuthSession {
    pub identity: String,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::InvalidToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::InvalidToken)?;

        let session = state
            .sessions
            .resolve(token)
            .ok_or(AppError::InvalidToken)?;

        Ok(AuthSession {
            identity: session.identity,
            token: session.token,
            created_at: session.created_at,
        })
    }
}
