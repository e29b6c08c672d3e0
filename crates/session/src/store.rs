//! The session store: persists, retrieves and erases the current session.

use crate::telemetry::{SessionTelemetry, TracingTelemetry};
use portale_types::{AuthSession, KvStore, SessionUser};
use std::sync::Arc;

/// Storage key holding the composed, header-ready credential string.
pub const TOKEN_KEY: &str = "auth.token";
/// Storage key holding the serialized user profile.
pub const USER_KEY: &str = "auth.user";

/// Single source of truth for the current logged-in session.
///
/// Built on an injected [`KvStore`], so isolated instances (e.g. per test)
/// never share state. All operations are best-effort: storage failures are
/// reported to the telemetry hook and swallowed, never surfaced to the
/// caller. Concurrent `save` and `clear` calls race with last-write-wins
/// semantics per key; that hazard is accepted, not coordinated away.
pub struct SessionStore {
    store: Arc<dyn KvStore>,
    telemetry: Arc<dyn SessionTelemetry>,
}

impl SessionStore {
    /// Creates a session store with the default `tracing`-based telemetry.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_telemetry(store, Arc::new(TracingTelemetry))
    }

    /// Creates a session store with an injected telemetry hook.
    pub fn with_telemetry(store: Arc<dyn KvStore>, telemetry: Arc<dyn SessionTelemetry>) -> Self {
        Self { store, telemetry }
    }

    /// Persists a whole session, replacing any prior one.
    ///
    /// The credential is stored as its fully composed header value, so
    /// lookups never reassemble scheme and token. Both writes are issued
    /// even if the first fails.
    pub async fn save(&self, session: &AuthSession) {
        let header = session.credential.header_value();
        if let Err(e) = self.store.put(TOKEN_KEY, &header).await {
            self.telemetry.persistence_failure("save.token", &e);
        }
        match serde_json::to_string(&session.user) {
            Ok(json) => {
                if let Err(e) = self.store.put(USER_KEY, &json).await {
                    self.telemetry.persistence_failure("save.user", &e);
                }
            }
            Err(e) => self.telemetry.persistence_failure("save.user", &e.into()),
        }
    }

    /// The header-ready credential string, or `None` when no session is
    /// stored or the read fails.
    pub async fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY).await {
            Ok(value) => value,
            Err(e) => {
                self.telemetry.persistence_failure("read.token", &e);
                None
            }
        }
    }

    /// The stored profile snapshot, or `None` when absent or unreadable.
    pub async fn user(&self) -> Option<SessionUser> {
        let json = match self.store.get(USER_KEY).await {
            Ok(Some(json)) => json,
            Ok(None) => return None,
            Err(e) => {
                self.telemetry.persistence_failure("read.user", &e);
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                self.telemetry.persistence_failure("read.user", &e.into());
                None
            }
        }
    }

    /// Whether a stored session token exists.
    pub async fn is_authenticated(&self) -> bool {
        self.token().await.is_some()
    }

    /// Removes both session keys. Failures are swallowed so logout can
    /// never leave the caller stuck.
    pub async fn clear(&self) {
        if let Err(e) = self.store.remove(TOKEN_KEY).await {
            self.telemetry.persistence_failure("clear.token", &e);
        }
        if let Err(e) = self.store.remove(USER_KEY).await {
            self.telemetry.persistence_failure("clear.user", &e);
        }
    }

    /// Ends the session locally.
    ///
    /// Today this only delegates to [`SessionStore::clear`]; server-side
    /// token invalidation would hook in here.
    pub async fn logout(&self) {
        self.clear().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use portale_store::InMemoryKvStore;
    use portale_types::{PortaleError, SessionCredential, UserRole, error::Result};
    use std::sync::Mutex;

    fn session() -> AuthSession {
        AuthSession {
            credential: SessionCredential::new("abc123").with_scheme("Bearer"),
            user: SessionUser {
                id: "u-1".into(),
                first_name: "Luca".into(),
                last_name: "Rossi".into(),
                email: "luca@example.com".into(),
                role: UserRole::Company,
                status: "active".into(),
                company_id: Some("c-3".into()),
            },
        }
    }

    fn make_store() -> SessionStore {
        SessionStore::new(Arc::new(InMemoryKvStore::new()))
    }

    /// A store whose writes and deletes always fail; reads succeed empty.
    struct BrokenKvStore;

    #[async_trait]
    impl KvStore for BrokenKvStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }
        async fn put(&self, key: &str, _value: &str) -> Result<()> {
            Err(PortaleError::Storage(format!("write refused: {key}")))
        }
        async fn remove(&self, key: &str) -> Result<()> {
            Err(PortaleError::Storage(format!("delete refused: {key}")))
        }
    }

    #[derive(Default)]
    struct RecordingTelemetry {
        ops: Mutex<Vec<String>>,
    }

    impl SessionTelemetry for RecordingTelemetry {
        fn persistence_failure(&self, op: &str, _err: &PortaleError) {
            self.ops.lock().unwrap().push(op.to_string());
        }
    }

    #[tokio::test]
    async fn test_save_then_token_and_user() {
        let s = make_store();
        s.save(&session()).await;
        assert_eq!(s.token().await.as_deref(), Some("Bearer abc123"));
        assert_eq!(s.user().await, Some(session().user));
    }

    #[tokio::test]
    async fn test_scheme_composition_bare_token() {
        let s = make_store();
        let mut sess = session();
        sess.credential = SessionCredential::new("abc123");
        s.save(&sess).await;
        assert_eq!(s.token().await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_empty_store_returns_none() {
        let s = make_store();
        assert!(s.token().await.is_none());
        assert!(s.user().await.is_none());
        assert!(!s.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_session() {
        let s = make_store();
        s.save(&session()).await;

        let mut replacement = session();
        replacement.credential = SessionCredential::new("newtok").with_scheme("Bearer");
        replacement.user.email = "nuova@example.com".into();
        s.save(&replacement).await;

        assert_eq!(s.token().await.as_deref(), Some("Bearer newtok"));
        assert_eq!(s.user().await.unwrap().email, "nuova@example.com");
    }

    #[tokio::test]
    async fn test_clear_removes_both() {
        let s = make_store();
        s.save(&session()).await;
        s.clear().await;
        assert!(s.token().await.is_none());
        assert!(s.user().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears() {
        let s = make_store();
        s.save(&session()).await;
        s.logout().await;
        assert!(!s.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_is_authenticated_after_save() {
        let s = make_store();
        s.save(&session()).await;
        assert!(s.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_corrupt_user_degrades_to_none() {
        let kv = Arc::new(InMemoryKvStore::new());
        let telemetry = Arc::new(RecordingTelemetry::default());
        let s = SessionStore::with_telemetry(kv.clone(), telemetry.clone());

        kv.put(USER_KEY, "not json at all").await.unwrap();
        assert!(s.user().await.is_none());
        assert_eq!(telemetry.ops.lock().unwrap().as_slice(), ["read.user"]);
    }

    #[tokio::test]
    async fn test_failed_save_is_swallowed_and_recorded() {
        let telemetry = Arc::new(RecordingTelemetry::default());
        let s = SessionStore::with_telemetry(Arc::new(BrokenKvStore), telemetry.clone());

        // Must not panic or surface an error.
        s.save(&session()).await;

        let ops = telemetry.ops.lock().unwrap();
        assert_eq!(ops.as_slice(), ["save.token", "save.user"]);
    }

    #[tokio::test]
    async fn test_failed_clear_is_swallowed_and_recorded() {
        let telemetry = Arc::new(RecordingTelemetry::default());
        let s = SessionStore::with_telemetry(Arc::new(BrokenKvStore), telemetry.clone());

        s.clear().await;

        let ops = telemetry.ops.lock().unwrap();
        assert_eq!(ops.as_slice(), ["clear.token", "clear.user"]);
    }

    #[tokio::test]
    async fn test_isolated_instances_do_not_share_state() {
        let a = make_store();
        let b = make_store();
        a.save(&session()).await;
        assert!(b.token().await.is_none());
    }
}
