// ============================================================================
// SESSION - Persisted progress through the verification flow
// ============================================================================

use crate::models::status::VerificationStatus;
use crate::utils::constants::{
    STORAGE_KEY_EMAIL, STORAGE_KEY_OTP_REQUESTED_AT, STORAGE_KEY_STATUS, STORAGE_KEY_USERNAME,
};
use crate::utils::storage::KeyValueStore;

/// Session record. `otp_requested_at` is non-zero only while `Pending`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub username: String,
    pub email: String,
    status: VerificationStatus,
    otp_requested_at: i64,
}

impl Session {
    pub fn new(username: &str, email: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    /// Hydrate from storage; anything missing or unreadable falls back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let mut session = Self {
            username: store.get(STORAGE_KEY_USERNAME).unwrap_or_default(),
            email: store.get(STORAGE_KEY_EMAIL).unwrap_or_default(),
            status: store
                .get(STORAGE_KEY_STATUS)
                .map(|s| VerificationStatus::parse(&s))
                .unwrap_or_default(),
            otp_requested_at: store
                .get(STORAGE_KEY_OTP_REQUESTED_AT)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
                .map(|v| v as i64)
                .unwrap_or(0),
        };
        if !session.status.is_pending() {
            session.otp_requested_at = 0;
        }
        session
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<(), String> {
        store.set(STORAGE_KEY_USERNAME, &self.username)?;
        store.set(STORAGE_KEY_EMAIL, &self.email)?;
        store.set(STORAGE_KEY_STATUS, self.status.as_str())?;
        store.set(STORAGE_KEY_OTP_REQUESTED_AT, &self.otp_requested_at.to_string())?;
        Ok(())
    }

    pub fn status(&self) -> &VerificationStatus {
        &self.status
    }

    pub fn otp_requested_at(&self) -> i64 {
        self.otp_requested_at
    }

    pub fn has_username(&self) -> bool {
        !self.username.is_empty()
    }

    /// not_started/any -> pending after the service accepted an OTP request
    pub fn mark_otp_requested(&mut self, now_ms: i64) {
        self.status = VerificationStatus::Pending;
        self.otp_requested_at = now_ms;
    }

    /// Apply the status the service reported
    pub fn apply_status(&mut self, status: VerificationStatus) {
        if !status.is_pending() {
            self.otp_requested_at = 0;
        }
        self.status = status;
    }

    /// Step 3 is only meaningful with a live OTP request
    pub fn awaiting_otp(&self) -> bool {
        self.status.is_pending() && self.otp_requested_at > 0
    }
}
