// ============================================================================
// API CLIENT - HTTP only, no flow logic (stateless)
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use url::form_urlencoded;
use crate::models::{MessageResponse, StatusResponse};
use crate::services::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Client for the verification service
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn request_otp_url(&self) -> String {
        format!("{}/verify", self.base_url)
    }

    pub fn submit_otp_url(&self) -> String {
        format!("{}/verify/otp", self.base_url)
    }

    pub fn status_url(&self, email: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(email.as_bytes()).collect();
        format!("{}/verify/status/{}", self.base_url, encoded)
    }

    /// `POST /verify`: ask the service to mail a new OTP
    pub async fn request_otp(&self, email: &str, username: &str) -> Result<MessageResponse, ApiError> {
        log::info!("📨 [API] Requesting OTP for {}", email);
        let body = form_body(&[("email", email), ("username", username)]);
        let response = post_form(&self.request_otp_url(), body).await?;
        read_message(response, "Failed to request OTP").await
    }

    /// `POST /verify/otp`
    pub async fn submit_otp(
        &self,
        email: &str,
        username: &str,
        otp: &str,
    ) -> Result<MessageResponse, ApiError> {
        log::info!("🔑 [API] Submitting OTP for {}", email);
        let body = form_body(&[("email", email), ("username", username), ("otp", otp)]);
        let response = post_form(&self.submit_otp_url(), body).await?;
        read_message(response, "Failed to verify OTP").await
    }

    /// `GET /verify/status/{email}`
    pub async fn get_status(&self, email: &str) -> Result<StatusResponse, ApiError> {
        log::info!("🔍 [API] Checking status for {}", email);
        let response = Request::get(&self.status_url(email))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_json(response, "Failed to check status").await
    }
}

pub fn form_body(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().copied())
        .finish()
}

async fn post_form(url: &str, body: String) -> Result<Response, ApiError> {
    Request::post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(body)
        .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_body(response: Response, fallback: &str) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if ok {
        Ok(body)
    } else {
        log::warn!("⚠️ [API] HTTP {}: {}", status, body);
        Err(ApiError::from_error_body(status, &body, fallback))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    let body = read_body(response, fallback).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// 2xx with an unreadable body still counts as success
async fn read_message(response: Response, fallback: &str) -> Result<MessageResponse, ApiError> {
    let body = read_body(response, fallback).await?;
    Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
        log::warn!("⚠️ [API] Ignoring unreadable success body: {}", e);
        MessageResponse::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoint_urls() {
        let api = ApiClient::new("http://localhost:5000");
        assert_eq!(api.request_otp_url(), "http://localhost:5000/verify");
        assert_eq!(api.submit_otp_url(), "http://localhost:5000/verify/otp");
        assert_eq!(
            api.status_url("first.last+x@pilani.bits-pilani.ac.in"),
            "http://localhost:5000/verify/status/first.last%2Bx%40pilani.bits-pilani.ac.in"
        );
    }

    #[test]
    fn same_origin_urls_are_relative() {
        let api = ApiClient::new("");
        assert_eq!(api.request_otp_url(), "/verify");
    }

    #[test]
    fn form_body_is_urlencoded() {
        assert_eq!(
            form_body(&[("email", "a+b@goa.bits-pilani.ac.in"), ("username", "al ice")]),
            "email=a%2Bb%40goa.bits-pilani.ac.in&username=al+ice"
        );
    }
}
