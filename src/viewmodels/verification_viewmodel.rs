// ============================================================================
// VERIFICATION VIEWMODEL - Flow logic for the three steps
// ============================================================================
// No DOM access here: state changes go through AppState, everything else
// the page has to do is emitted as a UiEffect.
// ============================================================================

use std::rc::Rc;
use crate::config::AppConfig;
use crate::models::{MessageResponse, StatusResponse};
use crate::services::{ApiClient, ApiError};
use crate::state::{AppState, RequestKind, StatusMessage, Ticket};
use crate::utils::time::now_ms;
use crate::utils::validation::{is_valid_bits_email, is_valid_otp, sanitize_email};
use crate::viewmodels::cooldown::{cooldown_after_rejection, remaining_cooldown_secs};

/// Page-side work requested by the view model
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    StartCooldown(i64),
    ClearOtpInput,
    SetOtpSubmitEnabled(bool),
    SetEmailInput(String),
    FocusEmailInput,
    ShowStatus(StatusResponse),
}

/// A call that passed its guards and holds a ticket
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub ticket: Ticket,
    pub email: String,
    pub username: String,
    pub otp: Option<String>,
}

#[derive(Clone)]
pub struct VerificationViewModel {
    state: AppState,
    api: ApiClient,
    config: AppConfig,
    effects: Rc<dyn Fn(UiEffect)>,
}

impl VerificationViewModel {
    pub fn new<F>(state: AppState, api: ApiClient, config: AppConfig, effects: F) -> Self
    where
        F: Fn(UiEffect) + 'static,
    {
        Self {
            state,
            api,
            config,
            effects: Rc::new(effects),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn emit(&self, effect: UiEffect) {
        (self.effects)(effect);
    }

    fn say(&self, message: StatusMessage) {
        self.state.set_message(message);
    }

    // ------------------------------------------------------------------
    // Step 1: username
    // ------------------------------------------------------------------

    pub fn submit_username(&self, raw: &str) {
        let username = raw.trim().to_string();
        self.state.session.update(|s| s.username = username);
        self.emit(UiEffect::FocusEmailInput);
    }

    /// Keep a username typed but never submitted
    pub fn username_blurred(&self, raw: &str) {
        let username = raw.trim();
        if self.state.session.with(|s| s.username != username) {
            self.state.session.update(|s| s.username = username.to_string());
        }
    }

    // ------------------------------------------------------------------
    // Step 2: email + OTP request
    // ------------------------------------------------------------------

    /// Email button / Enter: store the typed email, then request unless cooling down
    pub async fn submit_email(&self, typed: &str) {
        let email = sanitize_email(typed);
        if !is_valid_bits_email(&email) {
            self.say(StatusMessage::error("Use your @*.bits-pilani.ac.in email."));
            return;
        }
        self.state.session.update(|s| s.email = email);
        if !self.state.cooldown.get().is_active() {
            self.request_otp().await;
        }
    }

    pub async fn request_otp(&self) {
        let Some(request) = self.prepare_request_otp() else {
            return;
        };
        let result = self.api.request_otp(&request.email, &request.username).await;
        self.finish_request_otp(request, result, now_ms());
    }

    pub fn prepare_request_otp(&self) -> Option<OutboundRequest> {
        let session = self.state.session.get();
        if !session.has_username() {
            self.say(StatusMessage::error("Enter your Discord username first."));
            return None;
        }
        if !is_valid_bits_email(&session.email) {
            self.say(StatusMessage::error("Use your @*.bits-pilani.ac.in email."));
            return None;
        }
        if self.state.cooldown.get().is_active() {
            self.say(StatusMessage::error("Please wait before requesting another OTP."));
            return None;
        }
        if self.state.requests.in_flight(RequestKind::RequestOtp) {
            self.say(StatusMessage::info("An OTP request is already on its way."));
            return None;
        }

        self.say(StatusMessage::info("Requesting OTP..."));
        Some(OutboundRequest {
            ticket: self.state.requests.begin(RequestKind::RequestOtp),
            email: session.email,
            username: session.username,
            otp: None,
        })
    }

    pub fn finish_request_otp(
        &self,
        request: OutboundRequest,
        result: Result<MessageResponse, ApiError>,
        now_ms: i64,
    ) {
        if !self.state.requests.finish(request.ticket) {
            log::warn!("⚠️ [VERIFY] Dropping stale OTP request response");
            return;
        }
        match result {
            Ok(response) => {
                log::info!("✅ [VERIFY] OTP issued for {}", request.email);
                self.state.session.update(|s| s.mark_otp_requested(now_ms));
                self.emit(UiEffect::StartCooldown(self.config.otp_cooldown_seconds));
                self.emit(UiEffect::ClearOtpInput);
                // Left disabled, unlike the old page: the OTP input's validity enables it
                self.emit(UiEffect::SetOtpSubmitEnabled(false));
                self.say(StatusMessage::success(
                    response.message.unwrap_or_else(|| "OTP sent successfully.".to_string()),
                ));
            }
            Err(e) => {
                log::error!("❌ [VERIFY] OTP request failed: {}", e);
                self.say(StatusMessage::error(e.to_string()));
                if let Some(rejection) = e.cooldown_rejection() {
                    let requested_at = self.state.session.with(|s| s.otp_requested_at());
                    let seconds = cooldown_after_rejection(
                        rejection,
                        requested_at,
                        now_ms,
                        self.config.otp_cooldown_seconds,
                        self.config.min_retry_cooldown_seconds,
                    );
                    self.emit(UiEffect::StartCooldown(seconds));
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Step 3: OTP
    // ------------------------------------------------------------------

    /// Submit the code, then re-check status so the page shows the server's view
    pub async fn submit_otp(&self, raw_otp: &str) {
        let Some(request) = self.prepare_submit_otp(raw_otp) else {
            return;
        };
        let otp = request.otp.clone().unwrap_or_default();
        let result = self
            .api
            .submit_otp(&request.email, &request.username, &otp)
            .await;
        let email = request.email.clone();
        if self.finish_submit_otp(request, result) {
            self.check_status(Some(email), None).await;
        }
    }

    pub fn prepare_submit_otp(&self, raw_otp: &str) -> Option<OutboundRequest> {
        let otp = raw_otp.trim();
        let session = self.state.session.get();
        if session.email.is_empty() || !session.status().is_pending() {
            self.say(StatusMessage::error("Request an OTP before entering the code."));
            return None;
        }
        if !is_valid_otp(otp) {
            self.say(StatusMessage::error("Enter a 6-digit OTP."));
            return None;
        }
        if self.state.requests.in_flight(RequestKind::SubmitOtp) {
            self.say(StatusMessage::info("Still verifying the previous code."));
            return None;
        }

        self.say(StatusMessage::info("Verifying OTP..."));
        Some(OutboundRequest {
            ticket: self.state.requests.begin(RequestKind::SubmitOtp),
            email: session.email,
            username: session.username,
            otp: Some(otp.to_string()),
        })
    }

    /// Returns whether a status re-check should follow
    pub fn finish_submit_otp(
        &self,
        request: OutboundRequest,
        result: Result<MessageResponse, ApiError>,
    ) -> bool {
        if !self.state.requests.finish(request.ticket) {
            log::warn!("⚠️ [VERIFY] Dropping stale OTP submission response");
            return false;
        }
        match result {
            Ok(response) => {
                log::info!("✅ [VERIFY] OTP accepted for {}", request.email);
                self.emit(UiEffect::ClearOtpInput);
                self.emit(UiEffect::SetOtpSubmitEnabled(false));
                self.say(StatusMessage::success(
                    response.message.unwrap_or_else(|| "OTP verified.".to_string()),
                ));
                true
            }
            Err(e) => {
                log::error!("❌ [VERIFY] OTP rejected: {}", e);
                self.say(StatusMessage::error(e.to_string()));
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Status polling
    // ------------------------------------------------------------------

    pub async fn check_status(&self, email_override: Option<String>, typed_email: Option<String>) {
        let Some(request) =
            self.prepare_status_check(email_override.as_deref(), typed_email.as_deref())
        else {
            return;
        };
        let result = self.api.get_status(&request.email).await;
        self.finish_status_check(request, result);
    }

    /// Candidate email: override, then the email field, then the stored one
    pub fn prepare_status_check(
        &self,
        email_override: Option<&str>,
        typed_email: Option<&str>,
    ) -> Option<OutboundRequest> {
        let stored = self.state.session.with(|s| s.email.clone());
        let candidate = [email_override, typed_email]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .map(sanitize_email)
            .unwrap_or_else(|| sanitize_email(&stored));
        if !is_valid_bits_email(&candidate) {
            self.say(StatusMessage::error("Enter a valid @*.bits-pilani.ac.in email."));
            return None;
        }

        self.state.session.update(|s| s.email = candidate.clone());
        self.emit(UiEffect::SetEmailInput(candidate.clone()));
        self.say(StatusMessage::info("Checking status..."));
        Some(OutboundRequest {
            ticket: self.state.requests.begin(RequestKind::Status),
            email: candidate,
            username: self.state.session.with(|s| s.username.clone()),
            otp: None,
        })
    }

    pub fn finish_status_check(&self, request: OutboundRequest, result: Result<StatusResponse, ApiError>) {
        if !self.state.requests.finish(request.ticket) {
            log::warn!("⚠️ [VERIFY] Dropping stale status response for {}", request.email);
            return;
        }
        match result {
            Ok(data) => {
                log::info!("📋 [VERIFY] {} is {}", request.email, data.status);
                let pending = data.status.is_pending();
                let verified = data.status.is_verified();
                self.state.session.update(|s| s.apply_status(data.status.clone()));
                self.emit(UiEffect::ClearOtpInput);
                self.emit(UiEffect::SetOtpSubmitEnabled(pending));
                let text = format!("Status: {}", data.status);
                self.emit(UiEffect::ShowStatus(data));
                self.say(if verified {
                    StatusMessage::success(text)
                } else {
                    StatusMessage::info(text)
                });
            }
            Err(e) => {
                log::error!("❌ [VERIFY] Status check failed: {}", e);
                self.say(StatusMessage::error(e.to_string()));
            }
        }
    }

    // ------------------------------------------------------------------
    // Page load
    // ------------------------------------------------------------------

    /// Resume a cooldown cut short by a reload; returns whether the server should be polled
    pub fn resume(&self, now_ms: i64) -> bool {
        let session = self.state.session.get();
        let remaining = remaining_cooldown_secs(
            session.otp_requested_at(),
            now_ms,
            self.config.otp_cooldown_seconds,
        );
        self.emit(UiEffect::StartCooldown(remaining));
        !matches!(session.status(), crate::models::VerificationStatus::NotStarted)
    }
}
