// ============================================================================
// FORM BINDINGS - Elements of the verification page
// ============================================================================
// Every element is optional: a page without one of them just loses that piece.
// ============================================================================

use web_sys::{HtmlButtonElement, HtmlElement, HtmlInputElement};
use crate::dom::{get_button_by_id, get_html_element_by_id, get_input_by_id};
use crate::utils::constants::ids;

pub struct FormBindings {
    pub theme_toggle: Option<HtmlElement>,
    pub username_input: Option<HtmlInputElement>,
    pub submit_btn: Option<HtmlButtonElement>,
    pub step_1: Option<HtmlElement>,
    pub step_2: Option<HtmlElement>,
    pub step_3: Option<HtmlElement>,
    pub email_input: Option<HtmlInputElement>,
    pub email_submit_btn: Option<HtmlButtonElement>,
    pub otp_input: Option<HtmlInputElement>,
    pub otp_submit_btn: Option<HtmlButtonElement>,
    pub status_message: Option<HtmlElement>,
    pub check_status_btn: Option<HtmlButtonElement>,
    pub resend_otp_btn: Option<HtmlButtonElement>,
    pub status_card: Option<HtmlElement>,
    pub status_label: Option<HtmlElement>,
    pub status_detail: Option<HtmlElement>,
    pub display_email: Option<HtmlElement>,
    pub display_username: Option<HtmlElement>,
    pub display_uid: Option<HtmlElement>,
    pub back_btn: Option<HtmlElement>,
}

impl FormBindings {
    pub fn bind() -> Self {
        let bindings = Self {
            theme_toggle: get_html_element_by_id(ids::THEME_TOGGLE),
            username_input: get_input_by_id(ids::USERNAME_INPUT),
            submit_btn: get_button_by_id(ids::SUBMIT_BTN),
            step_1: get_html_element_by_id(ids::STEP_1),
            step_2: get_html_element_by_id(ids::STEP_2),
            step_3: get_html_element_by_id(ids::STEP_3),
            email_input: get_input_by_id(ids::EMAIL_INPUT),
            email_submit_btn: get_button_by_id(ids::EMAIL_SUBMIT_BTN),
            otp_input: get_input_by_id(ids::OTP_INPUT),
            otp_submit_btn: get_button_by_id(ids::OTP_SUBMIT_BTN),
            status_message: get_html_element_by_id(ids::STATUS_MESSAGE),
            check_status_btn: get_button_by_id(ids::CHECK_STATUS_BTN),
            resend_otp_btn: get_button_by_id(ids::RESEND_OTP_BTN),
            status_card: get_html_element_by_id(ids::STATUS_CARD),
            status_label: get_html_element_by_id(ids::STATUS_LABEL),
            status_detail: get_html_element_by_id(ids::STATUS_DETAIL),
            display_email: get_html_element_by_id(ids::DISPLAY_EMAIL),
            display_username: get_html_element_by_id(ids::DISPLAY_USERNAME),
            display_uid: get_html_element_by_id(ids::DISPLAY_UID),
            back_btn: get_html_element_by_id(ids::BACK_BTN),
        };
        if bindings.email_submit_btn.is_none() {
            log::warn!("⚠️ [FORM] #{} not found, OTP requests are disabled", ids::EMAIL_SUBMIT_BTN);
        }
        bindings
    }

    pub fn username_value(&self) -> String {
        self.username_input.as_ref().map(|i| i.value()).unwrap_or_default()
    }

    /// Email field contents, `None` without a field
    pub fn email_value(&self) -> Option<String> {
        self.email_input.as_ref().map(|i| i.value())
    }

    pub fn otp_value(&self) -> String {
        self.otp_input.as_ref().map(|i| i.value()).unwrap_or_default()
    }

    pub fn set_username_value(&self, value: &str) {
        if let Some(input) = &self.username_input {
            input.set_value(value);
        }
    }

    pub fn set_email_value(&self, value: &str) {
        if let Some(input) = &self.email_input {
            input.set_value(value);
        }
    }

    pub fn clear_otp(&self) {
        if let Some(input) = &self.otp_input {
            input.set_value("");
        }
    }

    pub fn set_otp_submit_enabled(&self, enabled: bool) {
        if let Some(btn) = &self.otp_submit_btn {
            btn.set_disabled(!enabled);
        }
    }

    pub fn focus_email(&self) {
        if let Some(input) = &self.email_input {
            if let Err(e) = input.focus() {
                log::warn!("⚠️ [FORM] Could not focus email field: {:?}", e);
            }
        }
    }
}

/// Enter in a field acts like clicking its button, if the button is enabled
pub fn click_if_enabled(button: &Option<HtmlButtonElement>) {
    if let Some(btn) = button {
        if !btn.disabled() {
            btn.click();
        }
    }
}
