use crate::utils::constants::STORAGE_KEY_THEME;
use crate::utils::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Stored choice first, then the OS preference, dark otherwise
    pub fn initial(store: &dyn KeyValueStore, prefers_light: bool) -> Self {
        store
            .get(STORAGE_KEY_THEME)
            .and_then(|s| Self::parse(&s))
            .unwrap_or(if prefers_light { Self::Light } else { Self::Dark })
    }
}
