//! Payment models matching the frontend Transaction interface.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    #[serde(rename = "TZS")]
    Tzs,
}

/// Mobile-money operators a payment can be pushed through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MobileMoneyProvider {
    #[serde(rename = "M-PESA")]
    MPesa,
    #[serde(rename = "TIGO")]
    Tigo,
    #[serde(rename = "AIRTEL")]
    Airtel,
    #[serde(rename = "HALOPESA")]
    HaloPesa,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

/// Result of a payment initiation. Never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: u64,
    #[serde(default)]
    pub currency: Currency,
    pub provider: MobileMoneyProvider,
    pub status: TransactionStatus,
    /// RFC 3339 timestamp
    pub date: String,
    pub reference: String,
}

/// Request body for pushing a payment prompt to a phone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: u64,
    pub phone: String,
    pub provider: MobileMoneyProvider,
}
