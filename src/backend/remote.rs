//! REST backend.
//!
//! One resource collection per entity under the configured base URL. Every call either
//! yields the parsed body or fails with a network or server error. Paths keep the API's
//! trailing-slash convention, and ids always travel as a single encoded path segment.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Backend;
use crate::errors::{GatewayError, Result};
use crate::models::{
    ForumPost, ForumPostDraft, Inquiry, InquiryDraft, InquiryStatus, InquiryStatusUpdate,
    PaymentRequest, Property, PropertyDraft, PropertyFilter, ReviewDraft, SignupRequest, Tenant,
    Transaction, User,
};

/// `{"user": ...}` envelope returned by the auth endpoints.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

pub struct RemoteBackend {
    client: Client,
    base_url: Url,
}

/// Ids the server could never have issued; sending them would address another resource.
fn is_dot_segment(id: &str) -> bool {
    matches!(id, "" | "." | "..")
}

impl RemoteBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| GatewayError::Validation(format!("Invalid API base URL {}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(GatewayError::Validation(format!(
                "Invalid API base URL {}",
                base_url
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Base URL plus `segments`, each percent-encoded, with the trailing slash the API expects.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Validation("API base URL cannot hold a path".to_string()))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        tracing::debug!(%method, path = url.path(), "Remote request");
        Ok(self.client.request(method, url))
    }

    /// Turn a non-success status into a server error carrying the response text.
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(GatewayError::Server {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<B, T>(&self, method: Method, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.request(method, segments)?.json(body).send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.request(Method::GET, segments)?.send().await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    /// Like `send_json`, but a 404 means "no such entity" rather than a failure.
    async fn send_json_optional<B, T>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self.request(method, segments)?.json(body).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::ensure_success(response).await?.json().await?))
    }

    async fn authenticate<B: Serialize + ?Sized + Sync>(
        &self,
        segments: &[&str],
        body: &B,
        failure: &str,
    ) -> Result<User> {
        let response = self.request(Method::POST, segments)?.json(body).send().await?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Authentication rejected");
            return Err(GatewayError::Authentication(failure.to_string()));
        }
        let envelope: UserEnvelope = response.json().await?;
        Ok(envelope.user)
    }
}

#[async_trait]
impl Backend for RemoteBackend {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn login(&self, identifier: &str) -> Result<User> {
        self.authenticate(
            &["auth", "login"],
            &json!({ "username": identifier }),
            "Login failed",
        )
        .await
    }

    async fn signup(&self, profile: &SignupRequest) -> Result<User> {
        self.authenticate(&["auth", "signup"], profile, "Signup failed")
            .await
    }

    async fn send_otp(&self, phone: &str) -> Result<()> {
        let response = self
            .request(Method::POST, &["auth", "otp", "send"])?
            .json(&json!({ "phone": phone }))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn verify_otp(&self, phone: &str, code: &str) -> Result<bool> {
        let response = self
            .request(Method::POST, &["auth", "otp", "verify"])?
            .json(&json!({ "phone": phone, "code": code }))
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    async fn list_properties(&self, filter: &PropertyFilter) -> Result<Vec<Property>> {
        let response = self
            .request(Method::GET, &["properties"])?
            .query(filter)
            .send()
            .await?;
        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn get_property(&self, id: &str) -> Result<Option<Property>> {
        if is_dot_segment(id) {
            return Ok(None);
        }
        let response = self
            .request(Method::GET, &["properties", id])?
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(Self::ensure_success(response).await?.json().await?))
    }

    async fn create_property(&self, draft: PropertyDraft) -> Result<Property> {
        self.send_json(Method::POST, &["properties"], &draft).await
    }

    async fn update_property(&self, property: Property) -> Result<Property> {
        if is_dot_segment(&property.id) {
            return Err(GatewayError::Validation(format!(
                "Invalid property id {:?}",
                property.id
            )));
        }
        self.send_json(Method::PUT, &["properties", property.id.as_str()], &property)
            .await
    }

    async fn add_review(&self, property_id: &str, draft: ReviewDraft) -> Result<Option<Property>> {
        if is_dot_segment(property_id) {
            return Ok(None);
        }
        self.send_json_optional(Method::POST, &["properties", property_id, "reviews"], &draft)
            .await
    }

    async fn list_inquiries(&self, _landlord_id: &str) -> Result<Vec<Inquiry>> {
        // The server scopes inquiries to the caller's own listings.
        self.get_json(&["inquiries"]).await
    }

    async fn send_inquiry(&self, draft: InquiryDraft) -> Result<Inquiry> {
        self.send_json(Method::POST, &["inquiries"], &draft).await
    }

    async fn set_inquiry_status(
        &self,
        id: &str,
        status: InquiryStatus,
    ) -> Result<Option<Inquiry>> {
        if is_dot_segment(id) {
            return Ok(None);
        }
        self.send_json_optional(Method::PATCH, &["inquiries", id], &InquiryStatusUpdate { status })
            .await
    }

    async fn list_tenants(&self, _landlord_id: &str) -> Result<Vec<Tenant>> {
        self.get_json(&["leases"]).await
    }

    async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Transaction> {
        self.send_json(Method::POST, &["payments", "initiate"], request)
            .await
    }

    async fn list_forum_posts(&self) -> Result<Vec<ForumPost>> {
        self.get_json(&["forum", "posts"]).await
    }

    async fn create_forum_post(&self, draft: ForumPostDraft) -> Result<ForumPost> {
        self.send_json(Method::POST, &["forum", "posts"], &draft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(base: &str) -> RemoteBackend {
        RemoteBackend::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_url_keeps_trailing_slash() {
        let remote = backend("http://localhost:8000/api");
        assert_eq!(
            remote.url(&["auth", "login"]).unwrap().as_str(),
            "http://localhost:8000/api/auth/login/"
        );

        let slashed = backend("http://localhost:8000/api/");
        assert_eq!(
            slashed.url(&["properties"]).unwrap().as_str(),
            "http://localhost:8000/api/properties/"
        );
    }

    #[test]
    fn test_url_encodes_ids_as_one_segment() {
        let remote = backend("http://localhost:8000/api");
        let url = remote.url(&["properties", "../leases/1"]).unwrap();
        assert_eq!(url.path(), "/api/properties/..%2Fleases%2F1/");

        let url = remote.url(&["inquiries", "i 1?x=#"]).unwrap();
        assert_eq!(url.path(), "/api/inquiries/i%201%3Fx=%23/");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_dot_segment_ids() {
        assert!(is_dot_segment(""));
        assert!(is_dot_segment("."));
        assert!(is_dot_segment(".."));
        assert!(!is_dot_segment("..."));
        assert!(!is_dot_segment("p.1"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            RemoteBackend::new("not a url", Duration::from_secs(1)),
            Err(GatewayError::Validation(_))
        ));
        assert!(matches!(
            RemoteBackend::new("mailto:ops@example.com", Duration::from_secs(1)),
            Err(GatewayError::Validation(_))
        ));
    }
}
