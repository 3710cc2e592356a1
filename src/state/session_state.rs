// ============================================================================
// SESSION STATE - Session record persisted on every mutation
// ============================================================================

use std::rc::Rc;
use crate::models::Session;
use crate::state::reactivity::ReactiveState;
use crate::utils::storage::KeyValueStore;

#[derive(Clone)]
pub struct SessionStore {
    session: ReactiveState<Session>,
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Hydrate from `storage`
    pub fn load(storage: Rc<dyn KeyValueStore>) -> Self {
        let session = Session::load(storage.as_ref());
        log::info!(
            "💾 [SESSION] Restored: status={} username={} email={}",
            session.status(),
            if session.has_username() { session.username.as_str() } else { "-" },
            if session.email.is_empty() { "-" } else { session.email.as_str() },
        );
        Self {
            session: ReactiveState::new(session),
            storage,
        }
    }

    pub fn get(&self) -> Session {
        self.session.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.session.with(f)
    }

    /// Mutate, persist, then notify subscribers
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let storage = self.storage.clone();
        self.session.update(move |session| {
            let result = f(session);
            if let Err(e) = session.save(storage.as_ref()) {
                log::error!("❌ [SESSION] Failed to persist session: {}", e);
            }
            result
        })
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.session.subscribe(callback);
    }

    pub fn storage(&self) -> Rc<dyn KeyValueStore> {
        self.storage.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::models::VerificationStatus;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn update_persists_before_subscribers_run() {
        let storage = Rc::new(MemoryStorage::default());
        let store = SessionStore::load(storage.clone());

        let persisted_status = Rc::new(Cell::new(false));
        {
            let storage = storage.clone();
            let persisted_status = persisted_status.clone();
            store.subscribe(move || {
                persisted_status.set(storage.get("status").as_deref() == Some("pending"));
            });
        }

        store.update(|s| {
            s.username = "alice".to_string();
            s.mark_otp_requested(42_000);
        });

        assert!(persisted_status.get());
        assert_eq!(storage.get("username").as_deref(), Some("alice"));
        assert_eq!(storage.get("otpRequestedAt").as_deref(), Some("42000"));

        store.update(|s| s.apply_status(VerificationStatus::Verified));
        assert_eq!(storage.get("otpRequestedAt").as_deref(), Some("0"));
        assert_eq!(SessionStore::load(storage).get().status(), &VerificationStatus::Verified);
    }
}
