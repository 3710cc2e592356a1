// ============================================================================
// STATUS PANEL - Dashboard card and inline status message
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{add_class, remove_classes, set_attribute, set_text_content};
use crate::models::{StatusResponse, VerificationStatus};
use crate::state::StatusMessage;
use crate::utils::constants::NOT_AVAILABLE;
use crate::utils::time::{format_local_datetime, format_local_time, parse_timestamp};
use crate::views::form::FormBindings;

const CARD_CLASSES: [&str; 3] = ["success", "error", "pending"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCard {
    pub label: String,
    pub detail: String,
    pub uid: String,
    pub class: &'static str,
}

impl StatusCard {
    pub fn from_response(data: &StatusResponse) -> Self {
        let detail = match &data.status {
            VerificationStatus::Verified => match data.verified_at.as_deref().filter(|s| !s.is_empty()) {
                Some(raw) => match parse_timestamp(raw) {
                    Some(at) => format!("Verified at {}", format_local_datetime(at)),
                    None => format!("Verified at {}", raw),
                },
                None => "Verified".to_string(),
            },
            VerificationStatus::Pending => match data.expiry.and_then(format_local_time) {
                Some(until) => format!("OTP valid until {}", until),
                None => "OTP pending verification".to_string(),
            },
            _ => "No active request. Please start verification.".to_string(),
        };
        let class = match &data.status {
            VerificationStatus::Verified => "success",
            VerificationStatus::Pending => "pending",
            _ => "error",
        };

        Self {
            label: data.status.label(),
            detail,
            uid: data.uid_text().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            class,
        }
    }
}

pub fn render_status_card(form: &FormBindings, card: &StatusCard) -> Result<(), JsValue> {
    let Some(label) = &form.status_label else {
        return Ok(());
    };
    set_text_content(label, &card.label);
    if let Some(detail) = &form.status_detail {
        set_text_content(detail, &card.detail);
    }
    if let Some(uid) = &form.display_uid {
        set_text_content(uid, &card.uid);
    }
    if let Some(el) = &form.status_card {
        remove_classes(el, &CARD_CLASSES)?;
        add_class(el, card.class)?;
    }
    Ok(())
}

/// Text plus `data-type` so the stylesheet can colour it
pub fn render_message(form: &FormBindings, message: &StatusMessage) -> Result<(), JsValue> {
    if let Some(el) = &form.status_message {
        set_text_content(el, &message.text);
        set_attribute(el, "data-type", message.severity.as_str())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(raw: &str) -> StatusCard {
        StatusCard::from_response(&serde_json::from_str(raw).unwrap())
    }

    #[test]
    fn verified_card() {
        let c = card(r#"{"status":"verified","uid":"1234","verified_at":"2024-03-01T10:00:00.5"}"#);
        assert_eq!(c.label, "verified");
        assert!(c.detail.starts_with("Verified at 20"), "{}", c.detail);
        assert_eq!(c.uid, "1234");
        assert_eq!(c.class, "success");

        assert_eq!(card(r#"{"status":"verified","verified_at":null}"#).detail, "Verified");
    }

    #[test]
    fn pending_card() {
        let c = card(r#"{"status":"pending","expiry":1700000600}"#);
        assert!(c.detail.starts_with("OTP valid until "), "{}", c.detail);
        assert_eq!(c.uid, "N/A");
        assert_eq!(c.class, "pending");

        assert_eq!(card(r#"{"status":"pending"}"#).detail, "OTP pending verification");
    }

    #[test]
    fn anything_else_is_an_error_card() {
        let c = card(r#"{"status":"not_found"}"#);
        assert_eq!(c.label, "not found");
        assert_eq!(c.detail, "No active request. Please start verification.");
        assert_eq!(c.class, "error");
    }
}
