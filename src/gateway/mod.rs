//! The data-access gateway.
//!
//! UI callers see one grouped contract (`auth`, `properties`, `inquiries`, `tenants`,
//! `payment`, `forum`) regardless of which backend was injected at startup. The gateway
//! validates identifying fields, owns the current-user session, and forwards the rest.
//! It never retries and never recovers an error on the caller's behalf.

use std::sync::Arc;

use crate::backend::Backend;
use crate::errors::{GatewayError, Result};
use crate::models::{
    amenity, DashboardSummary, ForumPost, ForumPostDraft, Inquiry, InquiryDraft, InquiryStatus,
    MobileMoneyProvider, PaymentRequest, Property, PropertyDraft, PropertyFilter, ReviewDraft,
    SignupRequest, Tenant, Transaction, User,
};
use crate::session::Session;

#[derive(Clone)]
pub struct Gateway {
    backend: Arc<dyn Backend>,
    session: Arc<Session>,
}

impl Gateway {
    pub fn new(backend: Arc<dyn Backend>, session: Session) -> Self {
        Self {
            backend,
            session: Arc::new(session),
        }
    }

    /// Name of the injected backend strategy.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { gateway: self }
    }

    pub fn properties(&self) -> Properties<'_> {
        Properties { gateway: self }
    }

    pub fn inquiries(&self) -> Inquiries<'_> {
        Inquiries { gateway: self }
    }

    pub fn tenants(&self) -> Tenants<'_> {
        Tenants { gateway: self }
    }

    pub fn payment(&self) -> Payment<'_> {
        Payment { gateway: self }
    }

    pub fn forum(&self) -> Forum<'_> {
        Forum { gateway: self }
    }

    /// Overview numbers for a landlord, built from the same loose lookups the
    /// inbox and lease tabs use.
    pub async fn dashboard(&self, landlord_id: &str) -> Result<DashboardSummary> {
        let everything = PropertyFilter::default();
        let (properties, inquiries, tenants) = tokio::try_join!(
            self.backend.list_properties(&everything),
            self.backend.list_inquiries(landlord_id),
            self.backend.list_tenants(landlord_id),
        )?;
        Ok(DashboardSummary::from_records(&properties, &inquiries, &tenants))
    }
}

fn require(present: bool, message: &str) -> Result<()> {
    if present {
        Ok(())
    } else {
        Err(GatewayError::Validation(message.to_string()))
    }
}

fn validate_listing(title: &str, amenities: &[String]) -> Result<()> {
    require(!title.trim().is_empty(), "Property title is required")?;
    let unknown = amenity::unknown(amenities);
    require(
        unknown.is_empty(),
        &format!("Unknown amenities: {}", unknown.join(", ")),
    )
}

pub struct Auth<'a> {
    gateway: &'a Gateway,
}

impl Auth<'_> {
    /// Resolve `identifier` (email or phone) to a user and make it current.
    pub async fn login(&self, identifier: &str) -> Result<User> {
        require(!identifier.trim().is_empty(), "Email or phone is required")?;
        let user = self.gateway.backend.login(identifier).await?;
        self.gateway.session.set(&user).await?;
        Ok(user)
    }

    /// Create an account (KYC pending) and make it current.
    pub async fn signup(&self, profile: &SignupRequest) -> Result<User> {
        require(profile.has_contact(), "Email or phone is required")?;
        let user = self.gateway.backend.signup(profile).await?;
        self.gateway.session.set(&user).await?;
        Ok(user)
    }

    pub async fn send_otp(&self, phone: &str) -> Result<()> {
        require(!phone.trim().is_empty(), "Phone number is required")?;
        self.gateway.backend.send_otp(phone).await
    }

    /// Check a one-time code. Does not sign anyone in.
    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<bool> {
        self.gateway.backend.verify_otp(phone, code).await
    }

    pub fn current_user(&self) -> Option<User> {
        self.gateway.session.current_user()
    }

    /// Always succeeds; a store failure only leaves a stale record on disk.
    pub async fn logout(&self) -> Result<()> {
        if let Err(e) = self.gateway.backend.logout().await {
            tracing::warn!("Backend logout failed: {}", e);
        }
        if let Err(e) = self.gateway.session.clear().await {
            tracing::warn!("Failed to clear persisted session: {}", e);
        }
        Ok(())
    }
}

pub struct Properties<'a> {
    gateway: &'a Gateway,
}

impl Properties<'_> {
    /// All properties matching every provided filter field, in storage order.
    pub async fn get_all(&self, filter: Option<&PropertyFilter>) -> Result<Vec<Property>> {
        let everything = PropertyFilter::default();
        self.gateway
            .backend
            .list_properties(filter.unwrap_or(&everything))
            .await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Property>> {
        self.gateway.backend.get_property(id).await
    }

    pub async fn create(&self, draft: PropertyDraft) -> Result<Property> {
        validate_listing(&draft.title, &draft.amenities)?;
        self.gateway.backend.create_property(draft).await
    }

    /// Replace the stored record with the same id.
    ///
    /// An unknown id leaves the collection untouched and still hands `property` back.
    pub async fn update(&self, property: Property) -> Result<Property> {
        validate_listing(&property.title, &property.amenities)?;
        self.gateway.backend.update_property(property).await
    }

    /// Prepend a review; `None` when the property does not exist.
    pub async fn add_review(&self, property_id: &str, draft: ReviewDraft) -> Result<Option<Property>> {
        require(
            (1..=5).contains(&draft.rating),
            "Rating must be between 1 and 5",
        )?;
        self.gateway.backend.add_review(property_id, draft).await
    }
}

pub struct Inquiries<'a> {
    gateway: &'a Gateway,
}

impl Inquiries<'_> {
    /// Newest first. The landlord id is passed through but not used to filter.
    pub async fn get_by_landlord(&self, landlord_id: &str) -> Result<Vec<Inquiry>> {
        self.gateway.backend.list_inquiries(landlord_id).await
    }

    pub async fn send(&self, draft: InquiryDraft) -> Result<Inquiry> {
        require(!draft.property_id.trim().is_empty(), "Property id is required")?;
        self.gateway.backend.send_inquiry(draft).await
    }

    pub async fn set_status(&self, id: &str, status: InquiryStatus) -> Result<Option<Inquiry>> {
        self.gateway.backend.set_inquiry_status(id, status).await
    }
}

pub struct Tenants<'a> {
    gateway: &'a Gateway,
}

impl Tenants<'_> {
    /// The landlord id is passed through but not used to filter.
    pub async fn get_by_landlord(&self, landlord_id: &str) -> Result<Vec<Tenant>> {
        self.gateway.backend.list_tenants(landlord_id).await
    }
}

pub struct Payment<'a> {
    gateway: &'a Gateway,
}

impl Payment<'_> {
    /// Push a mobile-money prompt and wait for the outcome. No retry, no polling.
    pub async fn initiate(
        &self,
        amount: u64,
        phone: &str,
        provider: MobileMoneyProvider,
    ) -> Result<Transaction> {
        require(amount > 0, "Amount must be positive")?;
        require(!phone.trim().is_empty(), "Phone number is required")?;
        let request = PaymentRequest {
            amount,
            phone: phone.to_string(),
            provider,
        };
        self.gateway.backend.initiate_payment(&request).await
    }
}

pub struct Forum<'a> {
    gateway: &'a Gateway,
}

impl Forum<'_> {
    /// Newest first.
    pub async fn get_posts(&self) -> Result<Vec<ForumPost>> {
        self.gateway.backend.list_forum_posts().await
    }

    pub async fn create_post(&self, draft: ForumPostDraft) -> Result<ForumPost> {
        require(!draft.title.trim().is_empty(), "Post title is required")?;
        self.gateway.backend.create_forum_post(draft).await
    }
}
