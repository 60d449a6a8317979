// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer: initialises all backend subsystems and provides
// async-friendly methods for the Dioxus UI to call.
//
// Everything here is cheaply cloneable (Arc-wrapped) so pages can move a
// handle into closures and async blocks without lifetime issues. Pages
// never talk to the catalog, store, or HTTP crates directly.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use shinefiling_api::{BackendApi, DocumentUpload, HttpBackendClient};
use shinefiling_catalog::{
    CategoryGroup, ReconciledService, ServiceManager, definitions, group_by_category,
    merge_catalog, reconcile, resolve_slug,
};
use shinefiling_core::AppConfig;
use shinefiling_core::error::{Result, ShineError};
use shinefiling_core::types::{
    Application, CatalogEntry, Credentials, NewServiceProduct, Notification, OtpVerification,
    PaymentRecord, ServiceProductUpdate, ServiceRequest, ServiceStatus, SessionUser, SignupData,
    Theme, UserDocument,
};
use shinefiling_store::{
    AppEvent, EventBus, KvStore, MemoryStore, SessionStore, SqliteStore, hash_bytes,
};
use tokio::sync::broadcast;
use tracing::{info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    api: Arc<dyn BackendApi>,
    overrides: ServiceManager,
    session: SessionStore,
    events: EventBus,
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services.  Call once at app startup.
    ///
    /// Creates the data directory, opens the SQLite store, and builds the
    /// HTTP client from the persisted configuration.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();
        let store: Arc<dyn KvStore> = Arc::new(SqliteStore::open(dir.join("shinefiling.db"))?);
        let api = HttpBackendClient::new(&config)?;

        info!("app services initialised");
        Ok(Self::with_backend(Arc::new(api), store, config, dir))
    }

    /// In-memory stand-in for when persistent storage cannot be opened.
    /// Overrides, session, and theme will not survive a restart.
    pub fn fallback() -> Result<Self> {
        warn!("running on in-memory storage, local state will not persist");
        let config = AppConfig::default();
        let api = HttpBackendClient::new(&config)?;
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        Ok(Self::with_backend(
            Arc::new(api),
            store,
            config,
            std::env::temp_dir(),
        ))
    }

    /// Wire the service layer over explicit parts. Tests inject a canned
    /// backend and an in-memory store here.
    pub fn with_backend(
        api: Arc<dyn BackendApi>,
        store: Arc<dyn KvStore>,
        config: AppConfig,
        data_dir: PathBuf,
    ) -> Self {
        let events = EventBus::new();
        let overrides = ServiceManager::new(Arc::clone(&store), events.clone());
        let session = SessionStore::new(store, events.clone());
        Self {
            api,
            overrides,
            session,
            events,
            config: Arc::new(Mutex::new(config)),
            data_dir,
        }
    }

    // -- Catalog -------------------------------------------------------------

    /// Customer storefront: the live catalog merged with the built-in
    /// taxonomy, minus anything hidden on this device, grouped for display.
    ///
    /// A backend failure degrades to the built-in list rather than erroring;
    /// browsing must work offline.
    pub async fn storefront(&self) -> Vec<CategoryGroup> {
        let remote = self.remote_catalog().await;
        let inactive = self.overrides.inactive_services();
        let visible = reconcile(&definitions(), &remote, &inactive);
        group_by_category(&visible)
    }

    /// Look up one visible service by its route slug.
    pub async fn service_by_slug(&self, slug: &str) -> Option<ReconciledService> {
        let remote = self.remote_catalog().await;
        let inactive = self.overrides.inactive_services();
        reconcile(&definitions(), &remote, &inactive)
            .into_values()
            .find(|service| resolve_slug(&service.name) == Some(slug))
    }

    async fn remote_catalog(&self) -> Vec<CatalogEntry> {
        match self.api.get_service_catalog().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "catalog fetch failed, showing the built-in list");
                Vec::new()
            }
        }
    }

    /// Admin view: the full merge, including hidden and inactive services.
    pub async fn admin_catalog(&self) -> Result<Vec<ReconciledService>> {
        let remote = self.api.get_service_catalog().await?;
        let inactive = self.overrides.inactive_services();
        Ok(merge_catalog(&definitions(), &remote, &inactive)
            .into_values()
            .collect())
    }

    /// Hide or show a service on this device only. Returns `true` when the
    /// service is now hidden.
    pub fn toggle_local(&self, id: &str) -> Result<bool> {
        self.overrides.toggle_service_status(id)
    }

    /// Flip a service's status on the backend (admin only).
    pub async fn set_remote_status(
        &self,
        id: &str,
        status: ServiceStatus,
    ) -> Result<CatalogEntry> {
        let update = ServiceProductUpdate {
            status: Some(status),
            ..Default::default()
        };
        let entry = self.api.update_service_product(id, &update).await?;
        self.events.emit(AppEvent::ServiceStatusChanged);
        Ok(entry)
    }

    /// Change a service's price on the backend (admin only).
    pub async fn set_remote_price(&self, id: &str, price: u32) -> Result<CatalogEntry> {
        let update = ServiceProductUpdate {
            price: Some(price),
            ..Default::default()
        };
        let entry = self.api.update_service_product(id, &update).await?;
        self.events.emit(AppEvent::ServiceStatusChanged);
        Ok(entry)
    }

    /// List a new service on the backend (admin only).
    pub async fn create_product(&self, product: &NewServiceProduct) -> Result<CatalogEntry> {
        let created = self.api.create_service_product(product).await?;
        info!(id = %created.id, name = %created.name, "service listed");
        self.events.emit(AppEvent::ServiceStatusChanged);
        Ok(created)
    }

    // -- Account -------------------------------------------------------------

    /// Exchange credentials for a session and persist it.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SessionUser> {
        let user = self.api.login_user(credentials).await?;
        self.session.save_user(&user)?;
        info!(email = %user.email, "signed in");
        Ok(user)
    }

    /// Register a new account. The backend emails an OTP on success.
    pub async fn sign_up(&self, signup: &SignupData) -> Result<()> {
        self.api.signup_user(signup).await?;
        info!(email = %signup.email, "signup submitted, verification code emailed");
        Ok(())
    }

    /// Confirm the emailed verification code.
    pub async fn confirm_otp(&self, verification: &OtpVerification) -> Result<()> {
        self.api.verify_otp(verification).await
    }

    pub fn sign_out(&self) -> Result<()> {
        self.session.clear_user()?;
        info!("signed out");
        Ok(())
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.session.current_user()
    }

    fn signed_in_user(&self) -> Result<SessionUser> {
        self.session.current_user().ok_or(ShineError::NotSignedIn)
    }

    pub fn theme(&self) -> Theme {
        self.session.theme()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.session.set_theme(theme)
    }

    // -- Dashboard -----------------------------------------------------------

    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        let user = self.signed_in_user()?;
        self.api.get_notifications(&user.email).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<()> {
        self.api.mark_notification_read(id).await?;
        self.events.emit(AppEvent::NotificationsChanged);
        Ok(())
    }

    pub async fn applications(&self) -> Result<Vec<Application>> {
        let user = self.signed_in_user()?;
        self.api.get_user_applications(&user.email).await
    }

    /// Submit a filing request. Works signed out; the form carries the
    /// contact details. Returns the new application id.
    pub async fn submit_filing(&self, request: &ServiceRequest) -> Result<String> {
        if request.full_name.trim().is_empty() || request.email.trim().is_empty() {
            return Err(ShineError::InvalidInput(
                "Please give us your name and an email address.".into(),
            ));
        }
        let id = self.api.submit_service_request(request).await?;
        info!(application = %id, service = %request.service_name, "filing submitted");
        Ok(id)
    }

    pub async fn documents(&self) -> Result<Vec<UserDocument>> {
        let user = self.signed_in_user()?;
        self.api.get_user_documents(&user.email).await
    }

    /// Upload a vault document, fingerprinting the bytes before they leave
    /// the device.
    pub async fn upload_document(
        &self,
        name: String,
        category: String,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<UserDocument> {
        let user = self.signed_in_user()?;
        let fingerprint = hash_bytes(&bytes);
        info!(file = %file_name, bytes = bytes.len(), sha256 = %fingerprint, "uploading document");

        let upload = DocumentUpload {
            name,
            category,
            file_name,
            bytes,
        };
        let stored = self.api.upload_user_document(&user.email, &upload).await?;
        if stored.sha256 != fingerprint {
            warn!(
                local = %fingerprint,
                remote = %stored.sha256,
                "vault fingerprint does not match what was uploaded"
            );
        }
        Ok(stored)
    }

    pub async fn payments(&self) -> Result<Vec<PaymentRecord>> {
        let user = self.signed_in_user()?;
        self.api.get_user_payments(user.account_key()).await
    }

    // -- Change notification -------------------------------------------------

    /// Subscribe to in-process change events (service toggles, sign-in/out).
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.events.subscribe()
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config. The API base URL and timeout are read
    /// at startup, so those changes apply from the next launch.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &std::path::Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &std::path::Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use shinefiling_core::types::UserRole;

    /// Canned backend. Flags select the failure modes under test.
    struct FakeBackend {
        catalog: Vec<CatalogEntry>,
        accept_login: bool,
        catalog_down: bool,
    }

    impl FakeBackend {
        fn up(catalog: Vec<CatalogEntry>) -> Self {
            Self {
                catalog,
                accept_login: true,
                catalog_down: false,
            }
        }
    }

    #[async_trait]
    impl BackendApi for FakeBackend {
        async fn get_service_catalog(&self) -> Result<Vec<CatalogEntry>> {
            if self.catalog_down {
                return Err(ShineError::Network("connection refused".into()));
            }
            Ok(self.catalog.clone())
        }

        async fn create_service_product(
            &self,
            product: &NewServiceProduct,
        ) -> Result<CatalogEntry> {
            Ok(CatalogEntry {
                id: "svc-new".into(),
                name: product.name.clone(),
                category_id: product.category_id.clone(),
                price: product.price,
                status: ServiceStatus::Active,
                sla: product.sla.clone(),
                docs_required: product.docs_required.clone(),
                description: product.description.clone(),
                icon: None,
            })
        }

        async fn update_service_product(
            &self,
            id: &str,
            update: &ServiceProductUpdate,
        ) -> Result<CatalogEntry> {
            let mut entry = self
                .catalog
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(ShineError::Api {
                    status: 404,
                    message: "no such service".into(),
                })?;
            if let Some(price) = update.price {
                entry.price = price;
            }
            if let Some(status) = update.status {
                entry.status = status;
            }
            Ok(entry)
        }

        async fn get_notifications(&self, _email: &str) -> Result<Vec<Notification>> {
            Ok(Vec::new())
        }

        async fn mark_notification_read(&self, _id: &str) -> Result<()> {
            Ok(())
        }

        async fn login_user(&self, credentials: &Credentials) -> Result<SessionUser> {
            if self.accept_login {
                Ok(SessionUser {
                    id: Some("u-1".into()),
                    email: credentials.email.clone(),
                    full_name: "Asha Rao".into(),
                    phone: None,
                    role: UserRole::Customer,
                })
            } else {
                Err(ShineError::AuthRejected("Invalid email or password".into()))
            }
        }

        async fn signup_user(&self, _signup: &SignupData) -> Result<()> {
            Ok(())
        }

        async fn verify_otp(&self, _verification: &OtpVerification) -> Result<()> {
            Ok(())
        }

        async fn submit_service_request(&self, _request: &ServiceRequest) -> Result<String> {
            Ok("APP-2026-0001".into())
        }

        async fn get_user_applications(&self, _email: &str) -> Result<Vec<Application>> {
            Ok(Vec::new())
        }

        async fn get_user_documents(&self, _email: &str) -> Result<Vec<UserDocument>> {
            Ok(Vec::new())
        }

        async fn upload_user_document(
            &self,
            _email: &str,
            upload: &DocumentUpload,
        ) -> Result<UserDocument> {
            Ok(UserDocument {
                id: "doc-1".into(),
                name: upload.name.clone(),
                category: upload.category.clone(),
                file_name: upload.file_name.clone(),
                sha256: hash_bytes(&upload.bytes),
                size_bytes: upload.bytes.len() as u64,
                uploaded_at: chrono::Utc::now(),
            })
        }

        async fn get_user_payments(&self, _user_id: &str) -> Result<Vec<PaymentRecord>> {
            Ok(Vec::new())
        }
    }

    fn services(api: FakeBackend) -> AppServices {
        AppServices::with_backend(
            Arc::new(api),
            Arc::new(MemoryStore::new()),
            AppConfig::default(),
            std::env::temp_dir(),
        )
    }

    fn gst_entry(status: ServiceStatus) -> CatalogEntry {
        CatalogEntry {
            id: "svc-gst".into(),
            name: "GST Registration".into(),
            category_id: "tax_compliance".into(),
            price: 2999,
            status,
            sla: Some("3-5 working days".into()),
            docs_required: vec!["PAN".into(), "Aadhaar".into()],
            description: None,
            icon: None,
        }
    }

    fn all_services(groups: &[CategoryGroup]) -> impl Iterator<Item = &ReconciledService> {
        groups.iter().flat_map(|g| g.services.iter())
    }

    #[tokio::test]
    async fn sign_in_persists_the_session() {
        let svc = services(FakeBackend::up(Vec::new()));
        let user = svc
            .sign_in(&Credentials {
                email: "asha@example.in".into(),
                password: "pw".into(),
            })
            .await
            .expect("login accepted");
        assert_eq!(user.full_name, "Asha Rao");

        let persisted = svc.current_user().expect("session persisted");
        assert_eq!(persisted.email, "asha@example.in");
    }

    #[tokio::test]
    async fn rejected_sign_in_leaves_no_session() {
        let mut api = FakeBackend::up(Vec::new());
        api.accept_login = false;
        let svc = services(api);

        let err = svc
            .sign_in(&Credentials {
                email: "asha@example.in".into(),
                password: "nope".into(),
            })
            .await
            .expect_err("login rejected");
        assert!(matches!(err, ShineError::AuthRejected(_)));
        assert!(svc.current_user().is_none());
    }

    #[tokio::test]
    async fn storefront_shows_the_built_in_list_when_offline() {
        let mut api = FakeBackend::up(Vec::new());
        api.catalog_down = true;
        let svc = services(api);

        let groups = svc.storefront().await;
        assert_eq!(groups.len(), 8);
        assert!(all_services(&groups).any(|s| s.name == "GST Registration"));
    }

    #[tokio::test]
    async fn backend_pricing_overrides_the_built_in_entry() {
        let svc = services(FakeBackend::up(vec![gst_entry(ServiceStatus::Active)]));
        let groups = svc.storefront().await;
        let gst = all_services(&groups)
            .find(|s| s.key == "gstregistration")
            .expect("gst present");
        assert_eq!(gst.price, Some(2999));
        assert_eq!(gst.remote_id.as_deref(), Some("svc-gst"));
    }

    #[tokio::test]
    async fn remotely_inactive_services_leave_the_storefront() {
        let svc = services(FakeBackend::up(vec![gst_entry(ServiceStatus::Inactive)]));
        let groups = svc.storefront().await;
        assert!(!all_services(&groups).any(|s| s.key == "gstregistration"));

        // The admin view still lists it, priced and switched off.
        let all = svc.admin_catalog().await.expect("admin view");
        let gst = all
            .iter()
            .find(|s| s.key == "gstregistration")
            .expect("merged");
        assert_eq!(gst.price, Some(2999));
        assert!(!gst.status.is_active());
    }

    #[tokio::test]
    async fn local_toggle_hides_a_service_until_toggled_back() {
        let svc = services(FakeBackend::up(Vec::new()));

        assert!(svc.toggle_local("gstregistration").expect("toggle"));
        let groups = svc.storefront().await;
        assert!(!all_services(&groups).any(|s| s.key == "gstregistration"));

        assert!(!svc.toggle_local("gstregistration").expect("toggle back"));
        let groups = svc.storefront().await;
        assert!(all_services(&groups).any(|s| s.key == "gstregistration"));
    }

    #[tokio::test]
    async fn filing_requests_need_contact_details() {
        let svc = services(FakeBackend::up(Vec::new()));
        let err = svc
            .submit_filing(&ServiceRequest {
                service_name: "GST Registration".into(),
                full_name: "  ".into(),
                email: String::new(),
                phone: String::new(),
                notes: None,
            })
            .await
            .expect_err("rejected");
        assert!(matches!(err, ShineError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn uploads_fingerprint_the_bytes_before_sending() {
        let svc = services(FakeBackend::up(Vec::new()));
        svc.sign_in(&Credentials {
            email: "asha@example.in".into(),
            password: "pw".into(),
        })
        .await
        .expect("login");

        let stored = svc
            .upload_document(
                "PAN Card".into(),
                "identity".into(),
                "pan.pdf".into(),
                b"%PDF-1.4".to_vec(),
            )
            .await
            .expect("upload");
        assert_eq!(stored.sha256, hash_bytes(b"%PDF-1.4"));
    }

    #[tokio::test]
    async fn vault_requires_a_session() {
        let svc = services(FakeBackend::up(Vec::new()));
        let err = svc.documents().await.expect_err("signed out");
        assert!(matches!(err, ShineError::NotSignedIn));
    }

    #[tokio::test]
    async fn remote_edits_ping_catalog_subscribers() {
        let svc = services(FakeBackend::up(vec![gst_entry(ServiceStatus::Active)]));
        let mut rx = svc.subscribe();
        svc.set_remote_price("svc-gst", 3499).await.expect("update");
        assert_eq!(rx.try_recv(), Ok(AppEvent::ServiceStatusChanged));
    }

    #[tokio::test]
    async fn marking_a_notification_read_pings_subscribers() {
        let svc = services(FakeBackend::up(Vec::new()));
        let mut rx = svc.subscribe();
        svc.mark_notification_read("n-1").await.expect("mark read");
        assert_eq!(rx.try_recv(), Ok(AppEvent::NotificationsChanged));
    }
}
