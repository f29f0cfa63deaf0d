//! Request and response models for the API.
//!
//! All models use serde for serialization/deserialization. Money fields are
//! `Decimal` internally and JSON numbers on the wire.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Auth Models
// ============================================================================

/// Login request. Fields stay untyped so a missing or non-string value
/// fails the credential check instead of the JSON extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: serde_json::Value,
    pub password: serde_json::Value,
}

/// Response containing a freshly issued bearer token.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Acknowledgement body for logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Ledger Models
// ============================================================================

/// Deposit/withdraw request. `amount` stays untyped until the gate has
/// checked it, so non-numeric input maps to `InvalidAmount`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AmountRequest {
    pub amount: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

/// One immutable balance-affecting record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance_after: Decimal,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_wire_shape() {
        let tx = Transaction {
            id: "V1StGXR8_Z5jdHi6B-myT".to_string(),
            kind: TransactionKind::Withdraw,
            amount: Decimal::new(4000, 2),
            balance_after: Decimal::new(6000, 2),
            timestamp: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["id"], "V1StGXR8_Z5jdHi6B-myT");
        assert_eq!(json["type"], "WITHDRAW");
        assert_eq!(json["amount"].as_f64().unwrap(), 40.0);
        assert_eq!(json["balanceAfter"].as_f64().unwrap(), 60.0);
        assert!(json["date"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    }

    #[test]
    fn test_login_request_missing_fields() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_null());
        assert!(req.password.is_null());
    }

    #[test]
    fn test_login_request_accepts_any_field_type() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":1,"password":["x"]}"#).unwrap();
        assert_eq!(req.username, serde_json::json!(1));
        assert!(req.password.is_array());
    }

    #[test]
    fn test_amount_request_keeps_raw_value() {
        let req: AmountRequest = serde_json::from_str(r#"{"amount":"12"}"#).unwrap();
        assert!(req.amount.is_string());

        let req: AmountRequest = serde_json::from_str("{}").unwrap();
        assert!(req.amount.is_null());
    }

    #[test]
    fn test_balance_serializes_as_number() {
        let json = serde_json::to_value(BalanceResponse {
            balance: Decimal::new(10050, 2),
        })
        .unwrap();
        assert_eq!(json["balance"].as_f64().unwrap(), 100.5);
    }
}
