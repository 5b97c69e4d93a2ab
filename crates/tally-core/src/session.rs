//! Session state derived from a persisted token pair
//!
//! Authentication status is presence-only: a refresh token in the store
//! means the session counts as authenticated. Token validity is never
//! checked client-side; the backend rejects stale credentials on use.

use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

/// Access/refresh token pair as returned by the login endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Abstraction over the persisted token store for dependency injection
///
/// The pair is written and cleared as a unit; the two tokens are read
/// individually.
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store(&self, tokens: &TokenPair);
    fn clear(&self);
}

/// In-memory token store for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<(Option<String>, Option<String>)>,
}

impl MemoryTokenStore {
    /// Seed the store with an arbitrary token combination
    pub fn seed(&self, access: Option<&str>, refresh: Option<&str>) {
        let mut guard = self.tokens.lock().expect("token store lock poisoned");
        guard.0 = access.map(str::to_string);
        guard.1 = refresh.map(str::to_string);
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.tokens.lock().expect("token store lock poisoned").0.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.tokens.lock().expect("token store lock poisoned").1.clone()
    }

    fn store(&self, tokens: &TokenPair) {
        let mut guard = self.tokens.lock().expect("token store lock poisoned");
        guard.0 = Some(tokens.access.clone());
        guard.1 = Some(tokens.refresh.clone());
    }

    fn clear(&self) {
        let mut guard = self.tokens.lock().expect("token store lock poisoned");
        guard.0 = None;
        guard.1 = None;
    }
}

/// The single owning handle for session state
///
/// Cloning shares the underlying store; every reader sees the same pair.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// True iff a refresh token is present in the store. Pure read.
    pub fn is_authenticated(&self) -> bool {
        self.store.refresh_token().is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.access_token()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.refresh_token()
    }

    /// Persist both tokens, as happens on a successful login
    pub fn store_tokens(&self, tokens: &TokenPair) {
        self.store.store(tokens);
    }

    /// Remove both tokens, as happens on a successful logout
    pub fn clear(&self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (Arc<MemoryTokenStore>, Session) {
        let store = Arc::new(MemoryTokenStore::default());
        let session = Session::new(Arc::clone(&store) as Arc<dyn TokenStore>);
        (store, session)
    }

    #[test]
    fn empty_store_is_not_authenticated() {
        let (_, session) = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
    }

    #[test]
    fn refresh_token_alone_authenticates() {
        let (store, session) = session();
        store.seed(None, Some("r1"));
        assert!(session.is_authenticated());
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn access_token_alone_does_not_authenticate() {
        let (store, session) = session();
        store.seed(Some("a1"), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn store_tokens_persists_both_verbatim() {
        let (_, session) = session();
        session.store_tokens(&TokenPair {
            access: "a1".to_string(),
            refresh: "r1".to_string(),
        });
        assert_eq!(session.access_token().as_deref(), Some("a1"));
        assert_eq!(session.refresh_token().as_deref(), Some("r1"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn clear_removes_both_tokens() {
        let (store, session) = session();
        store.seed(Some("a1"), Some("r1"));
        session.clear();
        assert_eq!(session.access_token(), None);
        assert_eq!(session.refresh_token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_same_store() {
        let (_, session) = session();
        let other = session.clone();
        session.store_tokens(&TokenPair {
            access: "a1".to_string(),
            refresh: "r1".to_string(),
        });
        assert!(other.is_authenticated());
    }
}
