//! In-process state: the session table and the ledger.
//!
//! Nothing here is persisted. Both structures are created once at startup,
//! shared through `AppState`, and guarded by their own lock.

pub mod ledger;
pub mod session;

pub use ledger::{Ledger, LedgerError};
pub use session::{Session, SessionStore};
