//! Backend strategies behind the gateway.
//!
//! Both implementations honor the same contract, so callers never learn which one
//! is active. The strategy is chosen once at startup and injected into the gateway.

mod local;
mod remote;
pub mod seed;

pub use local::{Latency, LocalBackend};
pub use remote::RemoteBackend;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{BackendKind, Config};
use crate::errors::Result;
use crate::models::{
    ForumPost, ForumPostDraft, Inquiry, InquiryDraft, InquiryStatus, PaymentRequest, Property,
    PropertyDraft, PropertyFilter, ReviewDraft, SignupRequest, Tenant, Transaction, User,
};
use crate::store::KvStore;

/// Data-access contract every backend implements.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    // Auth
    async fn login(&self, identifier: &str) -> Result<User>;
    async fn signup(&self, profile: &SignupRequest) -> Result<User>;
    async fn send_otp(&self, phone: &str) -> Result<()>;
    async fn verify_otp(&self, phone: &str, code: &str) -> Result<bool>;
    /// Backend-side sign-out work; the gateway clears the session itself.
    async fn logout(&self) -> Result<()> {
        Ok(())
    }

    // Properties
    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>>;
    async fn get_property(&self, id: &str) -> Result<Option<Property>>;
    async fn create_property(&self, draft: PropertyDraft) -> Result<Property>;
    async fn update_property(&self, property: Property) -> Result<Property>;
    async fn add_review(&self, property_id: &str, draft: ReviewDraft) -> Result<Option<Property>>;

    // Inquiries
    async fn list_inquiries(&self, landlord_id: &str) -> Result<Vec<Inquiry>>;
    async fn send_inquiry(&self, draft: InquiryDraft) -> Result<Inquiry>;
    async fn set_inquiry_status(&self, id: &str, status: InquiryStatus)
        -> Result<Option<Inquiry>>;

    // Leases
    async fn list_tenants(&self, landlord_id: &str) -> Result<Vec<Tenant>>;

    // Payment
    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Transaction>;

    // Forum
    async fn list_forum_posts(&self) -> Result<Vec<ForumPost>>;
    async fn create_forum_post(&self, draft: ForumPostDraft) -> Result<ForumPost>;
}

/// Build the backend strategy named by `config`.
pub async fn from_config(config: &Config, store: KvStore) -> Result<Arc<dyn Backend>> {
    let backend: Arc<dyn Backend> = match config.backend {
        BackendKind::Local => {
            let latency = if config.simulated_latency {
                Latency::Simulated
            } else {
                Latency::None
            };
            Arc::new(LocalBackend::open(store, latency).await?)
        }
        BackendKind::Remote => Arc::new(RemoteBackend::new(
            &config.api_base_url,
            config.http_timeout,
        )?),
    };

    tracing::info!("Using {} backend", backend.name());
    Ok(backend)
}

/// Prefixed unique id, e.g. `i_6f1c...`.
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}{}", prefix, uuid::Uuid::new_v4())
}

/// Today's date as `YYYY-MM-DD`.
pub(crate) fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
