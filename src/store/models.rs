use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer request document as fetched from the record source.
///
/// Every field except `id` is optional in the source documents; accessors
/// degrade to placeholders instead of failing. Records are immutable once
/// fetched — action outcomes go to the status map, never onto the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestRecord {
    pub id: String,
    #[serde(rename = "customerName", alias = "name", default)]
    pub customer_name: Option<String>,
    #[serde(rename = "userEmail", alias = "email", default)]
    pub user_email: Option<String>,
    #[serde(rename = "phoneNumber", alias = "phone", default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub courier: Option<String>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "submittedAt", alias = "timestamp", default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(rename = "productLinks", default)]
    pub product_links: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEntry {
    pub record_id: String,
    pub label: String,
    pub updated_at: String,
}
