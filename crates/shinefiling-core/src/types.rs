// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the ShineFiling client.
//
// Serde renames follow the backend wire format: objects are camelCase,
// enum variants are SCREAMING_SNAKE_CASE unless noted otherwise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a service on the backend catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Active,
    Inactive,
}

impl ServiceStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// The opposite status (used by the admin toggle).
    pub fn toggled(&self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// A service as published by the backend catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Backend-assigned identifier, stable across renames.
    pub id: String,
    pub name: String,
    pub category_id: String,
    /// Price in whole rupees.
    pub price: u32,
    pub status: ServiceStatus,
    /// Turnaround promise, e.g. "7-10 working days".
    #[serde(default)]
    pub sla: Option<String>,
    /// Documents the customer must provide.
    #[serde(default)]
    pub docs_required: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Icon name override; when absent the static taxonomy icon is kept.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Payload for creating a new catalog service (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceProduct {
    pub name: String,
    pub category_id: String,
    pub price: u32,
    #[serde(default)]
    pub sla: Option<String>,
    #[serde(default)]
    pub docs_required: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update for an existing catalog service (admin only).
///
/// Only fields that are `Some` are sent, so an update never clobbers
/// fields the admin did not touch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProductUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Role attached to a signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Customer,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The signed-in user as persisted locally and returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Backend account id; older sessions persisted before the field
    /// existed have none, and fall back to the email as the account key.
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

impl SessionUser {
    /// Key used for account-scoped backend lookups.
    pub fn account_key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.email)
    }
}

/// A notification addressed to the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle states of a filing application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Received, not yet picked up by an agent.
    Submitted,
    /// An agent is preparing or has filed the paperwork.
    InReview,
    /// Blocked on the customer (missing document, unpaid fee).
    ActionRequired,
    /// Filed and acknowledged by the authority.
    Completed,
    /// Rejected by the authority or withdrawn.
    Rejected,
}

impl ApplicationStatus {
    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::InReview => "In review",
            Self::ActionRequired => "Action required",
            Self::Completed => "Completed",
            Self::Rejected => "Rejected",
        }
    }
}

/// A filing application the user has submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub service_name: String,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A document stored in the user's vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    pub id: String,
    /// Display name chosen by the user, e.g. "PAN card".
    pub name: String,
    /// Vault category, e.g. "identity", "incorporation".
    pub category: String,
    /// Original file name at upload time.
    pub file_name: String,
    /// SHA-256 of the uploaded bytes, computed client-side before upload.
    pub sha256: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Status of a payment as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Created,
    Captured,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "Pending",
            Self::Captured => "Paid",
            Self::Failed => "Failed",
            Self::Refunded => "Refunded",
        }
    }
}

/// A payment made towards a filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub service_name: String,
    /// Amount in whole rupees.
    pub amount: u32,
    pub currency: String,
    pub status: PaymentStatus,
    /// Gateway reference, absent while the payment is still pending.
    #[serde(default)]
    pub reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Sign-in payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Sign-up payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// OTP verification payload (second step of sign-up).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpVerification {
    pub email: String,
    pub otp: String,
}

/// A request to start a filing for a named service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub service_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// UI colour theme, persisted per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Format a rupee amount with Indian digit grouping, e.g. `₹1,49,999`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        groups.push(&head[i - 2..i]);
        i -= 2;
    }
    groups.push(&head[..i]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_status_wire_format_is_uppercase() {
        let json = serde_json::to_string(&ServiceStatus::Active).expect("serialize");
        assert_eq!(json, r#""ACTIVE""#);
        let back: ServiceStatus = serde_json::from_str(r#""INACTIVE""#).expect("deserialize");
        assert_eq!(back, ServiceStatus::Inactive);
    }

    #[test]
    fn catalog_entry_tolerates_sparse_payloads() {
        // Older backend records carry only the required fields.
        let entry: CatalogEntry = serde_json::from_str(
            r#"{"id":"64a1","name":"GST Registration","categoryId":"tax_compliance","price":1999,"status":"ACTIVE"}"#,
        )
        .expect("deserialize");
        assert_eq!(entry.category_id, "tax_compliance");
        assert!(entry.sla.is_none());
        assert!(entry.docs_required.is_empty());
        assert!(entry.icon.is_none());
    }

    #[test]
    fn session_user_defaults_to_customer_role() {
        // Shape persisted by builds that predate the id field.
        let user: SessionUser = serde_json::from_str(
            r#"{"email":"a@b.in","fullName":"Asha Rao"}"#,
        )
        .expect("deserialize");
        assert_eq!(user.role, UserRole::Customer);
        assert!(!user.role.is_admin());
        assert_eq!(user.account_key(), "a@b.in");
    }

    #[test]
    fn account_key_prefers_the_backend_id() {
        let user: SessionUser = serde_json::from_str(
            r#"{"id":"u-42","email":"a@b.in","fullName":"Asha Rao"}"#,
        )
        .expect("deserialize");
        assert_eq!(user.account_key(), "u-42");
    }

    #[test]
    fn product_update_serializes_only_set_fields() {
        let update = ServiceProductUpdate {
            price: Some(2499),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).expect("serialize");
        assert_eq!(json, r#"{"price":2499}"#);
    }

    #[test]
    fn application_status_uses_screaming_snake_case() {
        let status: ApplicationStatus =
            serde_json::from_str(r#""ACTION_REQUIRED""#).expect("deserialize");
        assert_eq!(status, ApplicationStatus::ActionRequired);
        assert_eq!(status.label(), "Action required");
    }

    #[test]
    fn inr_formatting_uses_indian_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(499), "₹499");
        assert_eq!(format_inr(4999), "₹4,999");
        assert_eq!(format_inr(49999), "₹49,999");
        assert_eq!(format_inr(100000), "₹1,00,000");
        assert_eq!(format_inr(12345678), "₹1,23,45,678");
    }

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
        let json = serde_json::to_string(&Theme::Dark).expect("serialize");
        assert_eq!(json, r#""dark""#);
    }
}
