//! The ledger: one running balance plus its append-only transaction history.
//!
//! History is kept newest-first. Every successful mutation moves the balance
//! and pushes exactly one record whose `balance_after` equals the new
//! balance; a failed mutation changes neither. Balance and history share a
//! single mutex so that pairing holds under concurrent requests.

use crate::models::{Transaction, TransactionKind};
use chrono::Utc;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("balance overflow")]
    Overflow,
}

#[derive(Debug, Default)]
struct LedgerState {
    balance: Decimal,
    transactions: VecDeque<Transaction>,
}

impl LedgerState {
    fn record(&mut self, kind: TransactionKind, amount: Decimal, balance_after: Decimal) {
        self.balance = balance_after;
        self.transactions.push_front(Transaction {
            id: nanoid::nanoid!(),
            kind,
            amount,
            balance_after,
            timestamp: Utc::now(),
        });
    }
}

#[derive(Debug, Default)]
pub struct Ledger {
    state: Mutex<LedgerState>,
}

impl Ledger {
    /// Empty ledger with a zero balance.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> Decimal {
        self.state.lock().balance
    }

    /// Transaction history, most recent first.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.lock().transactions.iter().cloned().collect()
    }

    /// Balance and history read under one lock.
    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> (Decimal, Vec<Transaction>) {
        let state = self.state.lock();
        (state.balance, state.transactions.iter().cloned().collect())
    }

    /// Credit `amount` and return the new balance.
    ///
    /// `amount` must already be validated as strictly positive.
    pub fn deposit(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        debug_assert!(amount > Decimal::ZERO);
        let mut state = self.state.lock();

        let new_balance = state
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        state.record(TransactionKind::Deposit, amount, new_balance);

        Ok(new_balance)
    }

    /// Debit `amount` and return the new balance.
    ///
    /// Fails with `InsufficientFunds`, leaving the ledger untouched, when
    /// `amount` exceeds the current balance.
    pub fn withdraw(&self, amount: Decimal) -> Result<Decimal, LedgerError> {
        debug_assert!(amount > Decimal::ZERO);
        let mut state = self.state.lock();

        if amount > state.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: state.balance,
            });
        }

        let new_balance = state.balance - amount;
        state.record(TransactionKind::Withdraw, amount, new_balance);

        Ok(new_balance)
    }
}
