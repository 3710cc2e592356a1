// ============================================================================
// FORM VIEW - Step visibility and button state derived from the session
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{set_text_content, set_visible};
use crate::models::Session;
use crate::utils::constants::NOT_AVAILABLE;
use crate::utils::validation::{is_valid_bits_email, is_valid_otp, is_valid_username, sanitize_email};
use crate::viewmodels::CooldownDisplay;
use crate::views::form::FormBindings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub step_2_visible: bool,
    pub step_3_visible: bool,
    pub display_email: String,
    pub display_username: String,
    pub email_submit_enabled: bool,
    pub email_submit_label: String,
    pub check_status_enabled: bool,
    pub resend_enabled: bool,
}

impl FormView {
    /// `typed_email` is the email field's content, `None` when the page has no field
    pub fn derive(session: &Session, typed_email: Option<&str>, cooldown: CooldownDisplay) -> Self {
        let typed = typed_email.map(sanitize_email).unwrap_or_default();
        let effective_email = if typed.is_empty() { session.email.clone() } else { typed.clone() };

        Self {
            step_2_visible: session.has_username(),
            step_3_visible: session.awaiting_otp(),
            display_email: or_not_available(&session.email),
            display_username: or_not_available(&session.username),
            email_submit_enabled: is_valid_bits_email(&typed) && !cooldown.is_active(),
            email_submit_label: cooldown.button_label(),
            check_status_enabled: is_valid_bits_email(&effective_email),
            resend_enabled: session.status().is_pending() && !cooldown.is_active(),
        }
    }
}

fn or_not_available(value: &str) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

pub fn render_form(form: &FormBindings, view: &FormView) -> Result<(), JsValue> {
    if let Some(step) = &form.step_1 {
        set_visible(step, true)?;
    }
    if let Some(step) = &form.step_2 {
        set_visible(step, view.step_2_visible)?;
    }
    if let Some(step) = &form.step_3 {
        set_visible(step, view.step_3_visible)?;
    }
    if let Some(el) = &form.display_email {
        set_text_content(el, &view.display_email);
    }
    if let Some(el) = &form.display_username {
        set_text_content(el, &view.display_username);
    }
    if let Some(btn) = &form.email_submit_btn {
        btn.set_disabled(!view.email_submit_enabled);
        set_text_content(btn, &view.email_submit_label);
    }
    if let Some(btn) = &form.check_status_btn {
        btn.set_disabled(!view.check_status_enabled);
    }
    if let Some(btn) = &form.resend_otp_btn {
        btn.set_disabled(!view.resend_enabled);
    }
    Ok(())
}

pub fn render_username_validity(form: &FormBindings) {
    if let Some(btn) = &form.submit_btn {
        btn.set_disabled(!is_valid_username(&form.username_value()));
    }
}

pub fn render_otp_validity(form: &FormBindings) {
    form.set_otp_submit_enabled(is_valid_otp(form.otp_value().trim()));
}
