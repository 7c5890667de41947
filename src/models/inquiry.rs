//! Inquiry model matching the frontend Inquiry interface.

use serde::{Deserialize, Serialize};

/// One-way progression driven by the landlord's inbox.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Read,
    Responded,
}

/// A tenant's message about a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub property_id: String,
    pub property_title: String,
    pub tenant_name: String,
    pub tenant_phone: String,
    pub message: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub status: InquiryStatus,
}

/// Request body for sending an inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub property_id: String,
    pub property_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InquiryDraft {
    /// Fill defaults for the optional fields and stamp the inquiry as pending.
    pub fn into_inquiry(self, id: String, date: String) -> Inquiry {
        Inquiry {
            id,
            property_id: self.property_id,
            property_title: self.property_title,
            tenant_name: self.tenant_name.unwrap_or_else(|| "Anonymous".to_string()),
            tenant_phone: self.tenant_phone.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            date,
            status: InquiryStatus::Pending,
        }
    }
}

/// Request body for moving an inquiry to another status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InquiryStatusUpdate {
    pub status: InquiryStatus,
}
