use thiserror::Error;
use crate::models::ErrorBody;

/// Code the service may send with a cooldown rejection
pub const COOLDOWN_ERROR_CODE: &str = "otp_cooldown";
/// Text of the service's cooldown rejection, for servers without `code`
const COOLDOWN_MESSAGE_FALLBACK: &str = "1 minute";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
    /// Non-2xx answer; `message` is what the user sees
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        code: Option<String>,
        retry_after: Option<i64>,
    },
}

/// The service refused an OTP request because its own cooldown is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownRejection {
    pub retry_after: Option<i64>,
}

impl ApiError {
    /// Build from a non-2xx status and raw body
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        Self::Rejected {
            status,
            message: parsed.text().unwrap_or_else(|| fallback.to_string()),
            code: parsed.code,
            retry_after: parsed.retry_after,
        }
    }

    /// Structured fields first, message text only as a fallback
    pub fn cooldown_rejection(&self) -> Option<CooldownRejection> {
        match self {
            Self::Rejected { message, code, retry_after, .. } => {
                if retry_after.is_some() || code.as_deref() == Some(COOLDOWN_ERROR_CODE) {
                    Some(CooldownRejection { retry_after: *retry_after })
                } else if message.contains(COOLDOWN_MESSAGE_FALLBACK) {
                    Some(CooldownRejection { retry_after: None })
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_detail_then_fallback() {
        let err = ApiError::from_error_body(401, r#"{"detail":"Incorrect OTP!"}"#, "Failed to verify OTP");
        assert_eq!(err.to_string(), "Incorrect OTP!");

        let err = ApiError::from_error_body(502, "<html>Bad gateway</html>", "Failed to verify OTP");
        assert_eq!(err.to_string(), "Failed to verify OTP");
    }

    #[test]
    fn structured_cooldown_is_preferred() {
        let err = ApiError::from_error_body(
            429,
            r#"{"detail":"slow down","code":"otp_cooldown","retry_after":17}"#,
            "Failed to request OTP",
        );
        assert_eq!(err.cooldown_rejection(), Some(CooldownRejection { retry_after: Some(17) }));

        let err = ApiError::from_error_body(
            429,
            r#"{"detail":"Please wait 1 minute","retry_after":12.5}"#,
            "Failed to request OTP",
        );
        assert_eq!(err.to_string(), "Please wait 1 minute");
        assert_eq!(err.cooldown_rejection(), Some(CooldownRejection { retry_after: Some(13) }));

        let err = ApiError::from_error_body(429, r#"{"code":"otp_cooldown"}"#, "x");
        assert_eq!(err.cooldown_rejection(), Some(CooldownRejection { retry_after: None }));
    }

    #[test]
    fn message_text_is_only_a_fallback() {
        let err = ApiError::from_error_body(
            429,
            r#"{"detail":"Please wait 1 minute before requesting another OTP"}"#,
            "Failed to request OTP",
        );
        assert_eq!(err.cooldown_rejection(), Some(CooldownRejection { retry_after: None }));

        let err = ApiError::from_error_body(
            429,
            r#"{"detail":"Please wait 1 minute before requesting another OTP","code":false}"#,
            "Failed to request OTP",
        );
        assert_eq!(err.cooldown_rejection(), Some(CooldownRejection { retry_after: None }));

        let err = ApiError::from_error_body(400, r#"{"detail":"Email already verified"}"#, "x");
        assert_eq!(err.cooldown_rejection(), None);
        assert_eq!(ApiError::Network("Failed to fetch".into()).cooldown_rejection(), None);
    }
}
