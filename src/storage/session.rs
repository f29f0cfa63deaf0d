//! Session table: opaque bearer token → authenticated identity.
//!
//! Sessions live until revoked or until the process exits. An identity may
//! hold any number of concurrent sessions; each token maps to exactly one.
//!
//! Revoked tokens are wrapped in `Zeroizing` on the way out so the removed
//! string is cleared from memory when dropped.

use crate::auth::session::generate_session_token;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use zeroize::Zeroizing;

/// A live association between a token and the identity that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session for `identity` and return its token.
    ///
    /// The token is unique among live sessions; generation and insert happen
    /// under one write lock.
    pub fn create(&self, identity: &str) -> String {
        let mut sessions = self.sessions.write();

        let token = loop {
            let candidate = generate_session_token();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };

        sessions.insert(
            token.clone(),
            Session {
                token: token.clone(),
                identity: identity.to_string(),
                created_at: Utc::now(),
            },
        );

        token
    }

    /// Look up a session by token. No side effects.
    pub fn resolve(&self, token: &str) -> Option<Session> {
        self.sessions.read().get(token).cloned()
    }

    /// Remove a session. Idempotent: returns false if the token was not live.
    pub fn revoke(&self, token: &str) -> bool {
        match self.sessions.write().remove(token) {
            Some(session) => {
                let _token = Zeroizing::new(session.token);
                true
            }
            None => false,
        }
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_create_and_resolve() {
        let store = SessionStore::new();
        let token = store.create("admin");

        let session = store.resolve(&token).unwrap();
        assert_eq!(session.identity, "admin");
        assert_eq!(session.token, token);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_resolve_unknown_token() {
        let store = SessionStore::new();
        store.create("admin");
        assert!(store.resolve("not-a-token").is_none());
        assert!(store.resolve("").is_none());
    }

    #[test]
    fn test_revoke_is_idempotent() {
        let store = SessionStore::new();
        let token = store.create("admin");

        assert!(store.revoke(&token));
        assert!(store.resolve(&token).is_none());
        assert!(!store.revoke(&token));
        assert!(!store.revoke("never-issued"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_multiple_sessions_per_identity() {
        let store = SessionStore::new();
        let first = store.create("admin");
        let second = store.create("admin");

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);

        // Revoking one leaves the other usable
        store.revoke(&first);
        assert!(store.resolve(&first).is_none());
        assert_eq!(store.resolve(&second).unwrap().identity, "admin");
    }

    #[test]
    fn test_concurrent_create_yields_unique_tokens() {
        let store = Arc::new(SessionStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50).map(|_| store.create("admin")).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut tokens: Vec<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        tokens.sort();
        tokens.dedup();

        assert_eq!(tokens.len(), 400);
        assert_eq!(store.len(), 400);
    }
}
