//! Simulated backend over the local persisted store.
//!
//! Every operation sleeps for a fixed delay, then reads the whole collection, transforms
//! it in memory and writes the whole collection back. Last writer wins.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use subtle::ConstantTimeEq;
use tokio::sync::Mutex;

use super::{new_id, seed, today, Backend};
use crate::errors::Result;
use crate::models::{
    is_email_identifier, Currency, ForumPost, ForumPostDraft, Inquiry, InquiryDraft,
    InquiryStatus, KycStatus, PaymentRequest, Property, PropertyDraft, PropertyFilter, Review,
    ReviewDraft, SignupRequest, Tenant, Transaction, TransactionStatus, User, UserRole,
};
use crate::store::{keys, KvStore};

/// The one code the simulated SMS gateway "sends".
pub const SIMULATED_OTP: &str = "123456";

/// Per-operation artificial delays, in milliseconds.
mod delay {
    pub const LOGIN: u64 = 800;
    pub const SIGNUP: u64 = 1000;
    pub const OTP: u64 = 500;
    pub const LOGOUT: u64 = 300;
    pub const LIST_PROPERTIES: u64 = 600;
    pub const GET_PROPERTY: u64 = 400;
    pub const CREATE_PROPERTY: u64 = 1000;
    pub const UPDATE_PROPERTY: u64 = 800;
    pub const LIST_RECORDS: u64 = 500;
    pub const SEND_INQUIRY: u64 = 800;
    /// USSD push round-trip
    pub const PAYMENT: u64 = 2000;
    pub const CREATE_POST: u64 = 800;
}

/// Whether the local backend pretends to be a network away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    Simulated,
    None,
}

impl Latency {
    async fn pause(self, millis: u64) {
        if self == Latency::Simulated {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

pub struct LocalBackend {
    store: KvStore,
    latency: Latency,
    /// Serializes read-modify-write sections so no two mutations interleave.
    write_lock: Mutex<()>,
}

impl LocalBackend {
    /// Seed the store and return a ready backend.
    ///
    /// The property catalog is demo content and is rewritten on every activation.
    /// Inquiries, leases and forum posts are user-generated and seeded only if absent.
    pub async fn open(store: KvStore, latency: Latency) -> Result<Self> {
        store.set(keys::PROPERTIES, &seed::properties()).await?;
        store.set_if_absent(keys::INQUIRIES, &seed::inquiries()).await?;
        store.set_if_absent(keys::TENANTS, &seed::tenants()).await?;
        store.set_if_absent(keys::FORUM_POSTS, &seed::forum_posts()).await?;

        tracing::info!("Local store seeded with demonstration catalog");
        Ok(Self {
            store,
            latency,
            write_lock: Mutex::new(()),
        })
    }

    async fn properties(&self) -> Result<Vec<Property>> {
        self.store.get_list(keys::PROPERTIES).await
    }
}

#[async_trait]
impl Backend for LocalBackend {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn login(&self, identifier: &str) -> Result<User> {
        self.latency.pause(delay::LOGIN).await;

        // No credential check: every login fabricates a fresh verified tenant.
        let is_email = is_email_identifier(identifier);
        let handle = identifier.split('@').next().unwrap_or(identifier);
        Ok(User {
            id: new_id("u_"),
            name: format!("User {}", handle),
            role: UserRole::Tenant,
            email: is_email.then(|| identifier.to_string()),
            phone: (!is_email).then(|| identifier.to_string()),
            avatar: None,
            is_verified: true,
            kyc_status: KycStatus::Verified,
        })
    }

    async fn signup(&self, profile: &SignupRequest) -> Result<User> {
        self.latency.pause(delay::SIGNUP).await;

        Ok(User {
            id: new_id("u_"),
            name: profile
                .name
                .clone()
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| "New User".to_string()),
            role: profile.role,
            email: profile.email.clone(),
            phone: profile.phone.clone(),
            avatar: None,
            is_verified: false,
            kyc_status: KycStatus::Pending,
        })
    }

    async fn send_otp(&self, phone: &str) -> Result<()> {
        self.latency.pause(delay::OTP).await;
        tracing::info!(phone, "Simulated SMS: one-time code {}", SIMULATED_OTP);
        Ok(())
    }

    async fn verify_otp(&self, _phone: &str, code: &str) -> Result<bool> {
        self.latency.pause(delay::OTP).await;
        Ok(code.as_bytes().ct_eq(SIMULATED_OTP.as_bytes()).into())
    }

    async fn logout(&self) -> Result<()> {
        self.latency.pause(delay::LOGOUT).await;
        Ok(())
    }

    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        self.latency.pause(delay::LIST_PROPERTIES).await;
        Ok(filter.apply(self.properties().await?))
    }

    async fn get_property(&self, id: &str) -> Result<Option<Property>> {
        self.latency.pause(delay::GET_PROPERTY).await;
        Ok(self.properties().await?.into_iter().find(|p| p.id == id))
    }

    async fn create_property(&self, draft: PropertyDraft) -> Result<Property> {
        self.latency.pause(delay::CREATE_PROPERTY).await;
        let _guard = self.write_lock.lock().await;

        let mut properties = self.properties().await?;
        let created = draft.into_property(uuid::Uuid::new_v4().to_string());
        properties.push(created.clone());
        self.store.set(keys::PROPERTIES, &properties).await?;

        Ok(created)
    }

    async fn update_property(&self, property: Property) -> Result<Property> {
        self.latency.pause(delay::UPDATE_PROPERTY).await;
        let _guard = self.write_lock.lock().await;

        let mut properties = self.properties().await?;
        match properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => {
                *slot = property.clone();
                self.store.set(keys::PROPERTIES, &properties).await?;
            }
            // Unknown ids are a silent no-op; the caller still gets its record back.
            None => tracing::debug!(id = %property.id, "Update for unknown property ignored"),
        }

        Ok(property)
    }

    async fn add_review(&self, property_id: &str, draft: ReviewDraft) -> Result<Option<Property>> {
        self.latency.pause(delay::UPDATE_PROPERTY).await;
        let _guard = self.write_lock.lock().await;

        let mut properties = self.properties().await?;
        let Some(property) = properties.iter_mut().find(|p| p.id == property_id) else {
            return Ok(None);
        };

        let review = Review {
            id: new_id("r_"),
            user_id: draft.user_id,
            user_name: draft.user_name,
            rating: draft.rating,
            comment: draft.comment,
            date: today(),
        };
        property.reviews.get_or_insert_with(Vec::new).insert(0, review);
        let updated = property.clone();

        self.store.set(keys::PROPERTIES, &properties).await?;
        Ok(Some(updated))
    }

    async fn list_inquiries(&self, _landlord_id: &str) -> Result<Vec<Inquiry>> {
        self.latency.pause(delay::LIST_RECORDS).await;
        // Returns every inquiry regardless of landlord.
        self.store.get_list(keys::INQUIRIES).await
    }

    async fn send_inquiry(&self, draft: InquiryDraft) -> Result<Inquiry> {
        self.latency.pause(delay::SEND_INQUIRY).await;
        let _guard = self.write_lock.lock().await;

        let mut inquiries: Vec<Inquiry> = self.store.get_list(keys::INQUIRIES).await?;
        let created = draft.into_inquiry(new_id("i_"), today());
        inquiries.insert(0, created.clone());
        self.store.set(keys::INQUIRIES, &inquiries).await?;

        Ok(created)
    }

    async fn set_inquiry_status(
        &self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>> {
        self.latency.pause(delay::LIST_RECORDS).await;
        let _guard = self.write_lock.lock().await;

        let mut inquiries: Vec<Inquiry> = self.store.get_list(keys::INQUIRIES).await?;
        let Some(inquiry) = inquiries.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        inquiry.status = status;
        let updated = inquiry.clone();

        self.store.set(keys::INQUIRIES, &inquiries).await?;
        Ok(Some(updated))
    }

    async fn list_tenants(&self, _landlord_id: &str) -> Result<Vec<Tenant>> {
        self.latency.pause(delay::LIST_RECORDS).await;
        // Returns every lease regardless of landlord.
        self.store.get_list(keys::TENANTS).await
    }

    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Transaction> {
        self.latency.pause(delay::PAYMENT).await;

        let reference = uuid::Uuid::new_v4().as_u128() % 100_000;
        Ok(Transaction {
            id: new_id("tx_"),
            amount: request.amount,
            currency: Currency::Tzs,
            provider: request.provider,
            status: TransactionStatus::Success,
            date: Utc::now().to_rfc3339(),
            reference: format!("NIK-{}", reference),
        })
    }

    async fn list_forum_posts(&self) -> Result<Vec<ForumPost>> {
        self.latency.pause(delay::LIST_RECORDS).await;
        self.store.get_list(keys::FORUM_POSTS).await
    }

    async fn create_forum_post(&self, draft: ForumPostDraft) -> Result<ForumPost> {
        self.latency.pause(delay::CREATE_POST).await;
        let _guard = self.write_lock.lock().await;

        let mut posts: Vec<ForumPost> = self.store.get_list(keys::FORUM_POSTS).await?;
        let created = draft.into_post(new_id("f_"), today());
        posts.insert(0, created.clone());
        self.store.set(keys::FORUM_POSTS, &posts).await?;

        Ok(created)
    }
}
