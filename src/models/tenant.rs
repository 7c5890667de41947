//! Lease record model matching the frontend Tenant interface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaseStatus {
    Active,
    EndingSoon,
    Overdue,
}

/// A rental agreement between a tenant and a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub property_id: String,
    pub property_title: String,
    pub lease_start: String,
    pub lease_end: String,
    pub status: LeaseStatus,
    /// Whole TZS per month
    pub rent_amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lease_status_wire_values() {
        assert_eq!(
            serde_json::to_value(LeaseStatus::EndingSoon).unwrap(),
            "ENDING_SOON"
        );
        let status: LeaseStatus = serde_json::from_str("\"OVERDUE\"").unwrap();
        assert_eq!(status, LeaseStatus::Overdue);
    }
}
