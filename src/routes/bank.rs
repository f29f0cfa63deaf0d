//! Ledger API endpoints (all require AuthSession).
//!
//! Deposit and withdraw run the gate in order: the `AuthSession` extractor
//! rejects before the body is read, then the amount is validated, then the
//! ledger is touched.

use crate::auth::middleware::{AppState, AuthSession};
use crate::error::AppError;
use crate::models::{AmountRequest, BalanceResponse, TransactionsResponse};
use crate::routes::{json_body_error, validate_amount};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

/// Pull a validated amount out of a deposit/withdraw body. A body that was
/// read but is not a JSON object carries no usable number, so it is
/// `InvalidAmount` too; an oversized body stays 413.
fn amount_from_body(
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<rust_decimal::Decimal, AppError> {
    let Json(req) = body.map_err(|e| json_body_error(e, AppError::InvalidAmount))?;
    validate_amount(&req.amount)
}

/// GET /balance — Current balance
pub async fn get_balance(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(BalanceResponse {
        balance: state.ledger.balance(),
    }))
}

/// GET /transactions — History, most recent first
pub async fn list_transactions(
    _session: AuthSession,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(TransactionsResponse {
        transactions: state.ledger.transactions(),
    }))
}

/// POST /deposit — Credit the account
pub async fn deposit(
    session: AuthSession,
    State(state): State<AppState>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let amount = amount_from_body(body)?;

    let balance = state.ledger.deposit(amount)?;

    tracing::info!(action = "deposit", identity = %session.identity, %amount, %balance, "Deposit recorded");

    Ok(Json(BalanceResponse { balance }))
}

/// POST /withdraw — Debit the account
pub async fn withdraw(
    session: AuthSession,
    State(state): State<AppState>,
    body: Result<Json<AmountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let amount = amount_from_body(body)?;

    let balance = state.ledger.withdraw(amount).inspect_err(|e| {
        tracing::warn!(action = "withdraw_rejected", identity = %session.identity, error = %e, "Withdrawal rejected");
    })?;

    tracing::info!(action = "withdraw", identity = %session.identity, %amount, %balance, "Withdrawal recorded");

    Ok(Json(BalanceResponse { balance }))
}
