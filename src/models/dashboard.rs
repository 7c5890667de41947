//! Landlord dashboard summary.

use serde::Serialize;

use super::{Inquiry, InquiryStatus, Property, PropertyStatus, Tenant};

/// Headline numbers for the landlord overview tab.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_listings: usize,
    pub active_listings: usize,
    pub inquiries: usize,
    pub pending_inquiries: usize,
    pub tenants: usize,
    /// Sum of monthly rent across lease records, in TZS
    pub monthly_rent_roll: u64,
}

impl DashboardSummary {
    pub fn from_records(properties: &[Property], inquiries: &[Inquiry], tenants: &[Tenant]) -> Self {
        Self {
            total_listings: properties.len(),
            active_listings: properties
                .iter()
                .filter(|p| p.status == PropertyStatus::Active)
                .count(),
            inquiries: inquiries.len(),
            pending_inquiries: inquiries
                .iter()
                .filter(|i| i.status == InquiryStatus::Pending)
                .count(),
            tenants: tenants.len(),
            monthly_rent_roll: tenants.iter().map(|t| t.rent_amount).sum(),
        }
    }
}
