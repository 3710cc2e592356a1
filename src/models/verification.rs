use serde::{Deserialize, Serialize};
use crate::models::status::VerificationStatus;

/// 2xx body of `POST /verify` and `POST /verify/otp`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body. `detail` is FastAPI's field; `code`/`retry_after` are the structured cooldown hint.
///
/// Read field by field so one oddly typed field never hides the others.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(from = "serde_json::Value")]
pub struct ErrorBody {
    pub detail: Option<serde_json::Value>,
    pub message: Option<String>,
    pub code: Option<String>,
    pub retry_after: Option<i64>,
}

impl From<serde_json::Value> for ErrorBody {
    fn from(body: serde_json::Value) -> Self {
        Self {
            detail: body.get("detail").filter(|d| !d.is_null()).cloned(),
            message: body.get("message").and_then(text_field),
            code: body.get("code").and_then(text_field),
            retry_after: body
                .get("retry_after")
                .or_else(|| body.get("remaining_seconds"))
                .and_then(whole_seconds),
        }
    }
}

fn text_field(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Seconds rounded up; fractional and quoted numbers are accepted
fn whole_seconds(value: &serde_json::Value) -> Option<i64> {
    let secs = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (secs.is_finite() && secs >= 0.0 && secs <= i64::MAX as f64).then(|| secs.ceil() as i64)
}

impl ErrorBody {
    /// First usable human message (`detail` may also be a validation error list)
    pub fn text(&self) -> Option<String> {
        let detail = match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => items
                .iter()
                .find_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(str::to_string),
            _ => None,
        };
        detail.or_else(|| self.message.clone().filter(|m| !m.is_empty()))
    }
}

/// `GET /verify/status/{email}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub status: VerificationStatus,
    #[serde(default)]
    pub uid: Option<serde_json::Value>,
    #[serde(default)]
    pub verified_at: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expiry: Option<i64>,
}

impl StatusResponse {
    /// Discord uid as text (the service sends it as a number or a string)
    pub fn uid_text(&self) -> Option<String> {
        match self.uid.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_shapes() {
        let verified: StatusResponse = serde_json::from_str(
            r#"{"status":"verified","uid":123456789012345678,"verified_at":"2024-03-01T10:00:00"}"#,
        )
        .unwrap();
        assert!(verified.status.is_verified());
        assert_eq!(verified.uid_text().as_deref(), Some("123456789012345678"));

        let pending: StatusResponse =
            serde_json::from_str(r#"{"status":"pending","expiry":1700000600}"#).unwrap();
        assert_eq!(pending.expiry, Some(1_700_000_600));
        assert_eq!(pending.uid_text(), None);

        let gone: StatusResponse = serde_json::from_str(r#"{"status":"not_found"}"#).unwrap();
        assert_eq!(gone.status.as_str(), "not_found");
    }

    #[test]
    fn error_text_prefers_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Incorrect OTP!","message":"ignored"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("Incorrect OTP!"));

        let body: ErrorBody = serde_json::from_str(r#"{"message":"Nope"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("Nope"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","otp"],"msg":"field required"}]}"#)
                .unwrap();
        assert_eq!(body.text().as_deref(), Some("field required"));
    }

    #[test]
    fn remaining_seconds_alias() {
        let body: ErrorBody = serde_json::from_str(r#"{"remaining_seconds":42}"#).unwrap();
        assert_eq!(body.retry_after, Some(42));
    }

    #[test]
    fn odd_field_types_keep_the_rest() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Please wait 1 minute","retry_after":12.5}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("Please wait 1 minute"));
        assert_eq!(body.retry_after, Some(13));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"slow down","code":429,"retry_after":"7"}"#).unwrap();
        assert_eq!(body.text().as_deref(), Some("slow down"));
        assert_eq!(body.code.as_deref(), Some("429"));
        assert_eq!(body.retry_after, Some(7));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":"Incorrect OTP!","retry_after":[1],"message":{}}"#)
                .unwrap();
        assert_eq!(body.text().as_deref(), Some("Incorrect OTP!"));
        assert_eq!(body.retry_after, None);
        assert_eq!(body.message, None);

        let body: ErrorBody = serde_json::from_str(r#""just a string""#).unwrap();
        assert_eq!(body, ErrorBody::default());
    }
}
