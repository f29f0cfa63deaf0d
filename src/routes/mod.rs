//! API route handlers.

pub mod auth;
pub mod bank;

use crate::auth::middleware::AppState;
use crate::error::AppError;
use crate::middleware::{security_headers, trace_requests};
use axum::{
    extract::rejection::{BytesRejection, JsonRejection},
    http::StatusCode,
    routing::get,
    routing::post,
    Router,
};
use rust_decimal::Decimal;
use std::str::FromStr;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Validate a raw JSON `amount` and convert it to money.
///
/// Accepts only JSON numbers strictly greater than zero. The value is kept
/// at full precision; parsing goes through the number's shortest decimal
/// text so that `0.1` becomes exactly `0.1` rather than the nearest binary
/// float.
pub fn validate_amount(raw: &serde_json::Value) -> Result<Decimal, AppError> {
    let number = match raw {
        serde_json::Value::Number(n) => n,
        _ => return Err(AppError::InvalidAmount),
    };

    let value = match number.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f,
        _ => return Err(AppError::InvalidAmount),
    };

    // Exponent forms ("1e20") are not plain decimal text; fall back to the float
    let amount = Decimal::from_str(&number.to_string())
        .or_else(|_| Decimal::try_from(value))
        .map_err(|_| AppError::InvalidAmount)?;

    if amount <= Decimal::ZERO {
        return Err(AppError::InvalidAmount);
    }
    Ok(amount)
}

/// Map a body that could not be read at all. An oversized body keeps its 413.
pub fn body_read_error(rejection: &BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Map a JSON extractor failure. Read failures go through `body_read_error`;
/// anything else becomes `otherwise`.
pub fn json_body_error(rejection: JsonRejection, otherwise: AppError) -> AppError {
    match rejection {
        JsonRejection::BytesRejection(ref e) => body_read_error(e),
        _ => otherwise,
    }
}

/// Build the API router with all endpoints.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Auth endpoints
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        // Ledger endpoints
        .route("/balance", get(bank::get_balance))
        .route("/transactions", get(bank::list_transactions))
        .route("/deposit", post(bank::deposit))
        .route("/withdraw", post(bank::withdraw))
}

/// Full application: API routes, static file fallback, body limit, CORS,
/// request trace and security headers.
pub fn app(state: AppState) -> Router {
    // No allowed origins: every cross-origin preflight is rejected
    let cors = CorsLayer::new();

    api_router()
        .fallback_service(ServeDir::new(&state.config.static_dir))
        .layer(axum::extract::DefaultBodyLimit::max(
            state.config.max_body_bytes,
        ))
        .layer(cors)
        .layer(axum::middleware::from_fn(trace_requests))
        .layer(axum::middleware::from_fn(security_headers))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_amount_accepts_positive_numbers() {
        assert_eq!(validate_amount(&json!(100)).unwrap(), dec("100"));
        assert_eq!(validate_amount(&json!(40.5)).unwrap(), dec("40.5"));
        assert_eq!(validate_amount(&json!(0.1)).unwrap(), dec("0.1"));
        assert_eq!(validate_amount(&json!(0.01)).unwrap(), dec("0.01"));
    }

    #[test]
    fn test_validate_amount_keeps_sub_cent_precision() {
        assert_eq!(validate_amount(&json!(10.005)).unwrap(), dec("10.005"));
        assert_eq!(validate_amount(&json!(0.004)).unwrap(), dec("0.004"));
        assert_eq!(validate_amount(&json!(0.001)).unwrap(), dec("0.001"));
    }

    #[test]
    fn test_validate_amount_rejects_non_positive() {
        assert!(matches!(validate_amount(&json!(0)), Err(AppError::InvalidAmount)));
        assert!(matches!(validate_amount(&json!(0.0)), Err(AppError::InvalidAmount)));
        assert!(matches!(validate_amount(&json!(-5)), Err(AppError::InvalidAmount)));
        assert!(matches!(validate_amount(&json!(-0.01)), Err(AppError::InvalidAmount)));
        assert!(matches!(validate_amount(&json!(-0.0)), Err(AppError::InvalidAmount)));
    }

    #[test]
    fn test_validate_amount_rejects_non_numbers() {
        for raw in [
            json!("100"),
            json!(null),
            json!(true),
            json!([100]),
            json!({"value": 100}),
        ] {
            assert!(
                matches!(validate_amount(&raw), Err(AppError::InvalidAmount)),
                "accepted {}",
                raw
            );
        }
    }

    #[test]
    fn test_validate_amount_rejects_out_of_range() {
        assert!(matches!(validate_amount(&json!(1e300)), Err(AppError::InvalidAmount)));
    }
}
