// ============================================================================
// CONSTANTS - Storage keys, DOM ids and fixed UI text
// ============================================================================

/// localStorage keys (raw string values)
pub const STORAGE_KEY_USERNAME: &str = "username";
pub const STORAGE_KEY_EMAIL: &str = "email";
pub const STORAGE_KEY_STATUS: &str = "status";
pub const STORAGE_KEY_OTP_REQUESTED_AT: &str = "otpRequestedAt";
pub const STORAGE_KEY_THEME: &str = "theme";

pub const REQUEST_BUTTON_TEXT: &str = "Request OTP";
pub const NOT_AVAILABLE: &str = "N/A";
pub const BACK_LINK: &str = "index.html";

/// Campus subdomains accepted under bits-pilani.ac.in
pub const CAMPUS_SUBDOMAINS: [&str; 5] = ["online", "pilani", "hyderabad", "goa", "dubai"];

pub const USERNAME_MIN_LEN: usize = 2;
pub const USERNAME_MAX_LEN: usize = 32;
pub const OTP_LEN: usize = 6;

/// Element ids the controller binds to
pub mod ids {
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const USERNAME_INPUT: &str = "username-input";
    pub const SUBMIT_BTN: &str = "submit-btn";
    pub const STEP_1: &str = "step-1";
    pub const STEP_2: &str = "step-2";
    pub const STEP_3: &str = "step-3";
    pub const EMAIL_INPUT: &str = "email-input";
    pub const EMAIL_SUBMIT_BTN: &str = "email-submit-btn";
    pub const OTP_INPUT: &str = "otp-input";
    pub const OTP_SUBMIT_BTN: &str = "otp-submit-btn";
    pub const STATUS_MESSAGE: &str = "status-message";
    pub const CHECK_STATUS_BTN: &str = "check-status-btn";
    pub const RESEND_OTP_BTN: &str = "resend-otp-btn";
    pub const STATUS_CARD: &str = "status-card";
    pub const STATUS_LABEL: &str = "status-label";
    pub const STATUS_DETAIL: &str = "status-detail";
    pub const DISPLAY_EMAIL: &str = "display-email";
    pub const DISPLAY_USERNAME: &str = "display-username";
    pub const DISPLAY_UID: &str = "display-uid";
    pub const BACK_BTN: &str = "back-btn";
}
