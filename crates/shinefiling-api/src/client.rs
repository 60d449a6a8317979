// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend contract consumed by the client.

use async_trait::async_trait;
use shinefiling_core::error::Result;
use shinefiling_core::types::{
    Application, CatalogEntry, Credentials, NewServiceProduct, Notification, OtpVerification,
    PaymentRecord, ServiceProductUpdate, ServiceRequest, SessionUser, SignupData, UserDocument,
};

/// A document the customer wants to add to their vault.
///
/// `bytes` is the raw file content; the transport encoding (base64 over
/// JSON) is an implementation detail of the concrete client.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Display name chosen by the customer (e.g. "PAN Card").
    pub name: String,
    /// Vault category (identity, address, incorporation, tax, other).
    pub category: String,
    /// Original filename on disk, kept for the download link.
    pub file_name: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// Everything the client needs from the ShineFiling backend.
///
/// The UI and service layer depend on this trait, never on a concrete
/// HTTP client, so tests can substitute a canned backend.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Fetch the live service catalog.
    async fn get_service_catalog(&self) -> Result<Vec<CatalogEntry>>;

    /// Create a new service product (admin only).
    async fn create_service_product(&self, product: &NewServiceProduct) -> Result<CatalogEntry>;

    /// Update fields of an existing service product (admin only).
    async fn update_service_product(
        &self,
        id: &str,
        update: &ServiceProductUpdate,
    ) -> Result<CatalogEntry>;

    /// Fetch notifications for the given account.
    async fn get_notifications(&self, email: &str) -> Result<Vec<Notification>>;

    /// Mark a single notification as read.
    async fn mark_notification_read(&self, id: &str) -> Result<()>;

    /// Exchange credentials for a session. Rejections surface as
    /// [`ShineError::AuthRejected`](shinefiling_core::ShineError::AuthRejected).
    async fn login_user(&self, credentials: &Credentials) -> Result<SessionUser>;

    /// Register a new account. The backend emails an OTP on success.
    async fn signup_user(&self, signup: &SignupData) -> Result<()>;

    /// Confirm the emailed OTP. Rejections surface as
    /// [`ShineError::OtpRejected`](shinefiling_core::ShineError::OtpRejected).
    async fn verify_otp(&self, verification: &OtpVerification) -> Result<()>;

    /// Submit a filing request; returns the new application id.
    async fn submit_service_request(&self, request: &ServiceRequest) -> Result<String>;

    /// Fetch the account's filing applications.
    async fn get_user_applications(&self, email: &str) -> Result<Vec<Application>>;

    /// Fetch the account's document vault listing.
    async fn get_user_documents(&self, email: &str) -> Result<Vec<UserDocument>>;

    /// Upload a document to the account's vault.
    async fn upload_user_document(
        &self,
        email: &str,
        upload: &DocumentUpload,
    ) -> Result<UserDocument>;

    /// Fetch the account's payment history.
    async fn get_user_payments(&self, user_id: &str) -> Result<Vec<PaymentRecord>>;
}
