use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fixed API base baked in at build time (empty = resolve at runtime)
    pub api_base_url: Option<String>,
    pub api_default_port: u16,
    pub otp_cooldown_seconds: i64,
    pub min_retry_cooldown_seconds: i64,
    pub debounce_ms: u32,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            api_default_port: 5000,
            otp_cooldown_seconds: 60,
            min_retry_cooldown_seconds: 5,
            debounce_ms: 300,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            api_default_port: option_env!("API_DEFAULT_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.api_default_port),
            otp_cooldown_seconds: option_env!("OTP_COOLDOWN_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.otp_cooldown_seconds),
            min_retry_cooldown_seconds: option_env!("MIN_RETRY_COOLDOWN_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.min_retry_cooldown_seconds),
            debounce_ms: option_env!("DEBOUNCE_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.debounce_ms),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Error
        }
    }
}

/// What the page knows about where it is running
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLocation {
    pub protocol: String,
    pub hostname: String,
    /// `window.API_BASE_URL`
    pub base_url_override: Option<String>,
    /// `window.API_PORT`
    pub port_override: Option<String>,
}

impl PageLocation {
    pub fn is_localhost(&self) -> bool {
        self.hostname == "localhost" || self.hostname == "127.0.0.1"
    }
}

/// Resolve the verification API base URL.
///
/// Order: page override, build-time base, local dev server, same origin.
pub fn resolve_base_url(config: &AppConfig, location: &PageLocation) -> String {
    if let Some(base) = location
        .base_url_override
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        return base.trim_end_matches('/').to_string();
    }
    if let Some(base) = config.api_base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    if location.is_localhost() {
        let port = location
            .port_override
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| config.api_default_port.to_string());
        return format!("{}//{}:{}", location.protocol, location.hostname, port);
    }
    String::new()
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
