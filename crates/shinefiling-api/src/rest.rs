// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// reqwest implementation of the backend contract.

use crate::client::{BackendApi, DocumentUpload};
use async_trait::async_trait;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use shinefiling_core::AppConfig;
use shinefiling_core::error::{Result, ShineError};
use shinefiling_core::types::{
    Application, CatalogEntry, Credentials, NewServiceProduct, Notification, OtpVerification,
    PaymentRecord, ServiceProductUpdate, ServiceRequest, SessionUser, SignupData, UserDocument,
};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Backend client over HTTPS.
///
/// Holds a connection-pooled `reqwest::Client`; clones share the pool.
#[derive(Clone)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpBackendClient {
    /// Build a client from the application configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ShineError::Network(format!("building HTTP client: {e}")))?;
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            ShineError::InvalidInput(format!(
                "invalid API base URL {:?}: {e}",
                config.api_base_url
            ))
        })?;
        Ok(Self { http, base_url })
    }

    /// Join a relative path onto the configured base URL.
    ///
    /// `Url::join` would replace the last path segment of a slashless
    /// base, so the path is appended by hand.
    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/{path}"))
            .map_err(|e| ShineError::InvalidInput(format!("invalid endpoint {path}: {e}")))
    }

    async fn get_json<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        debug!(method = "GET", url = %url, "backend request");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| ShineError::Network(format!("GET {url}: {e}")))?;
        decode(url, response).await
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        debug!(method = "POST", url = %url, "backend request");
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ShineError::Network(format!("POST {url}: {e}")))?;
        decode(url, response).await
    }

    async fn put_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        debug!(method = "PUT", url = %url, "backend request");
        let response = self
            .http
            .put(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ShineError::Network(format!("PUT {url}: {e}")))?;
        decode(url, response).await
    }

    /// POST where only success or failure matters, not the response body.
    async fn post_unit<B>(&self, url: Url, body: &B) -> Result<()>
    where
        B: Serialize + Sync,
    {
        debug!(method = "POST", url = %url, "backend request");
        let response = self
            .http
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| ShineError::Network(format!("POST {url}: {e}")))?;
        check_status(response).await
    }

    /// Bodyless PUT where only success or failure matters.
    async fn put_unit(&self, url: Url) -> Result<()> {
        debug!(method = "PUT", url = %url, "backend request");
        let response = self
            .http
            .put(url.clone())
            .send()
            .await
            .map_err(|e| ShineError::Network(format!("PUT {url}: {e}")))?;
        check_status(response).await
    }
}

#[async_trait]
impl BackendApi for HttpBackendClient {
    async fn get_service_catalog(&self) -> Result<Vec<CatalogEntry>> {
        self.get_json(self.endpoint("services")?).await
    }

    async fn create_service_product(&self, product: &NewServiceProduct) -> Result<CatalogEntry> {
        self.post_json(self.endpoint("services")?, product).await
    }

    async fn update_service_product(
        &self,
        id: &str,
        update: &ServiceProductUpdate,
    ) -> Result<CatalogEntry> {
        self.put_json(self.endpoint(&format!("services/{id}"))?, update)
            .await
    }

    async fn get_notifications(&self, email: &str) -> Result<Vec<Notification>> {
        let mut url = self.endpoint("notifications")?;
        url.query_pairs_mut().append_pair("email", email);
        self.get_json(url).await
    }

    async fn mark_notification_read(&self, id: &str) -> Result<()> {
        self.put_unit(self.endpoint(&format!("notifications/{id}/read"))?)
            .await
    }

    async fn login_user(&self, credentials: &Credentials) -> Result<SessionUser> {
        let url = self.endpoint("auth/login")?;
        match self.post_json(url, credentials).await {
            Err(ShineError::Api { status, message }) if (400..500).contains(&status) => {
                Err(ShineError::AuthRejected(message))
            }
            other => other,
        }
    }

    async fn signup_user(&self, signup: &SignupData) -> Result<()> {
        self.post_unit(self.endpoint("auth/signup")?, signup).await
    }

    async fn verify_otp(&self, verification: &OtpVerification) -> Result<()> {
        let url = self.endpoint("auth/verify-otp")?;
        match self.post_unit(url, verification).await {
            Err(ShineError::Api { status, message }) if (400..500).contains(&status) => {
                Err(ShineError::OtpRejected(message))
            }
            other => other,
        }
    }

    async fn submit_service_request(&self, request: &ServiceRequest) -> Result<String> {
        let submitted: SubmittedApplication = self
            .post_json(self.endpoint("applications")?, request)
            .await?;
        Ok(submitted.application_id)
    }

    async fn get_user_applications(&self, email: &str) -> Result<Vec<Application>> {
        let mut url = self.endpoint("applications")?;
        url.query_pairs_mut().append_pair("email", email);
        self.get_json(url).await
    }

    async fn get_user_documents(&self, email: &str) -> Result<Vec<UserDocument>> {
        let mut url = self.endpoint("documents")?;
        url.query_pairs_mut().append_pair("email", email);
        self.get_json(url).await
    }

    async fn upload_user_document(
        &self,
        email: &str,
        upload: &DocumentUpload,
    ) -> Result<UserDocument> {
        let payload = UploadPayload::new(email, upload);
        self.post_json(self.endpoint("documents")?, &payload).await
    }

    async fn get_user_payments(&self, user_id: &str) -> Result<Vec<PaymentRecord>> {
        let mut url = self.endpoint("payments")?;
        url.query_pairs_mut().append_pair("userId", user_id);
        self.get_json(url).await
    }
}

/// Response to a filing submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmittedApplication {
    application_id: String,
}

/// JSON body for a document upload. File content travels base64-encoded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadPayload<'a> {
    email: &'a str,
    name: &'a str,
    category: &'a str,
    file_name: &'a str,
    content_base64: String,
}

impl<'a> UploadPayload<'a> {
    fn new(email: &'a str, upload: &'a DocumentUpload) -> Self {
        Self {
            email,
            name: &upload.name,
            category: &upload.category,
            file_name: &upload.file_name,
            content_base64: base64::engine::general_purpose::STANDARD.encode(&upload.bytes),
        }
    }
}

async fn decode<T>(url: Url, response: reqwest::Response) -> Result<T>
where
    T: DeserializeOwned + Send,
{
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status.as_u16(), response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ShineError::InvalidResponse(format!("decoding {url}: {e}")))
}

async fn check_status(response: reqwest::Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status.as_u16(), response).await)
    }
}

async fn api_error(status: u16, response: reqwest::Response) -> ShineError {
    let body = response.text().await.unwrap_or_default();
    ShineError::Api {
        status,
        message: error_message(status, &body),
    }
}

/// Pull a usable message out of a backend error body.
///
/// The backend wraps errors as `{"message": "..."}`; a few older
/// endpoints use `{"error": "..."}`. Anything else falls back to a
/// generic line carrying the status code.
fn error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
        error: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            let message = message.trim();
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }
    format!("request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpBackendClient {
        HttpBackendClient::new(&AppConfig::default()).expect("client should build")
    }

    #[test]
    fn endpoints_join_under_the_base_path() {
        let url = client().endpoint("services").expect("endpoint");
        assert_eq!(url.as_str(), "https://api.shinefiling.com/api/v1/services");
    }

    #[test]
    fn trailing_slash_on_the_base_does_not_double_up() {
        let config = AppConfig {
            api_base_url: "https://staging.shinefiling.com/api/v1/".into(),
            ..AppConfig::default()
        };
        let client = HttpBackendClient::new(&config).expect("client should build");
        let url = client.endpoint("auth/login").expect("endpoint");
        assert_eq!(
            url.as_str(),
            "https://staging.shinefiling.com/api/v1/auth/login"
        );
    }

    #[test]
    fn query_parameters_are_escaped() {
        let mut url = client().endpoint("notifications").expect("endpoint");
        url.query_pairs_mut().append_pair("email", "a+b@example.com");
        assert_eq!(
            url.as_str(),
            "https://api.shinefiling.com/api/v1/notifications?email=a%2Bb%40example.com"
        );
    }

    #[test]
    fn rejects_an_unparseable_base_url() {
        let config = AppConfig {
            api_base_url: "not a url".into(),
            ..AppConfig::default()
        };
        assert!(HttpBackendClient::new(&config).is_err());
    }

    #[test]
    fn error_bodies_prefer_the_message_field() {
        assert_eq!(
            error_message(400, r#"{"message":"Email already registered"}"#),
            "Email already registered"
        );
    }

    #[test]
    fn error_bodies_fall_back_to_the_error_field() {
        assert_eq!(error_message(401, r#"{"error":"invalid password"}"#), "invalid password");
    }

    #[test]
    fn unparseable_error_bodies_fall_back_to_the_status() {
        assert_eq!(
            error_message(502, "<html>Bad Gateway</html>"),
            "request failed with status 502"
        );
    }

    #[test]
    fn blank_message_fields_fall_back_to_the_status() {
        assert_eq!(
            error_message(500, r#"{"message":"   "}"#),
            "request failed with status 500"
        );
    }

    #[test]
    fn upload_payloads_carry_base64_content() {
        let upload = DocumentUpload {
            name: "PAN Card".into(),
            category: "identity".into(),
            file_name: "pan.pdf".into(),
            bytes: b"%PDF-1.4".to_vec(),
        };
        let payload = UploadPayload::new("priya@example.com", &upload);
        let json = serde_json::to_value(&payload).expect("serialise");
        assert_eq!(json["email"], "priya@example.com");
        assert_eq!(json["name"], "PAN Card");
        assert_eq!(json["category"], "identity");
        assert_eq!(json["fileName"], "pan.pdf");
        assert_eq!(json["contentBase64"], "JVBERi0xLjQ=");
    }

    #[test]
    fn submission_responses_deserialise_from_camel_case() {
        let submitted: SubmittedApplication =
            serde_json::from_str(r#"{"applicationId":"APP-2026-000231","status":"SUBMITTED"}"#)
                .expect("deserialise");
        assert_eq!(submitted.application_id, "APP-2026-000231");
    }
}
