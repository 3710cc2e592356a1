// ============================================================================
// APP STATE - Everything the controller owns, in one place
// ============================================================================

use std::rc::Rc;
use crate::models::Theme;
use crate::state::reactivity::ReactiveState;
use crate::state::request_tracker::RequestTracker;
use crate::state::session_state::SessionStore;
use crate::utils::constants::STORAGE_KEY_THEME;
use crate::utils::storage::KeyValueStore;
use crate::viewmodels::cooldown::CooldownDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Line shown in `#status-message`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Info }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), severity: Severity::Error }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub message: ReactiveState<Option<StatusMessage>>,
    pub requests: RequestTracker,
    pub cooldown: ReactiveState<CooldownDisplay>,
    pub theme: ReactiveState<Theme>,
}

impl AppState {
    pub fn new(storage: Rc<dyn KeyValueStore>, initial_theme: Theme) -> Self {
        Self {
            session: SessionStore::load(storage),
            message: ReactiveState::new(None),
            requests: RequestTracker::new(),
            cooldown: ReactiveState::new(CooldownDisplay::Ready),
            theme: ReactiveState::new(initial_theme),
        }
    }

    pub fn set_message(&self, message: StatusMessage) {
        self.message.set(Some(message));
    }

    pub fn toggle_theme(&self) -> Theme {
        let next = self.theme.update(|t| {
            *t = t.toggled();
            *t
        });
        if let Err(e) = self.session.storage().set(STORAGE_KEY_THEME, next.as_str()) {
            log::warn!("⚠️ [THEME] Could not persist theme: {}", e);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn theme_toggle_is_persisted() {
        let storage = Rc::new(MemoryStorage::default());
        let state = AppState::new(storage.clone(), Theme::Dark);
        assert_eq!(state.toggle_theme(), Theme::Light);
        assert_eq!(storage.get("theme").as_deref(), Some("light"));
        assert_eq!(state.toggle_theme(), Theme::Dark);
    }
}
