use reqwest::Client;
use serde::Deserialize;

use crate::config::{REQUESTS_COLLECTION, STATUS_COLLECTION};
use crate::store::models::RequestRecord;

/// Client for the hosted document store the request records live in.
///
/// The store exposes one bulk read per collection; there is no pagination
/// and no server-side filtering. Some deployments wrap the document array
/// in a `documents` envelope, others return it bare.
pub struct RecordSource {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize, Default)]
struct CollectionResponse {
    #[serde(default)]
    documents: Vec<serde_json::Value>,
}

impl RecordSource {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent("request-desk")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full request collection. Documents that cannot be
    /// deserialized at all are dropped with a warning rather than failing
    /// the whole batch.
    pub async fn fetch_requests(&self) -> anyhow::Result<Vec<RequestRecord>> {
        let url = format!("{}/{}", self.base_url, REQUESTS_COLLECTION);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            anyhow::bail!("Failed to fetch requests: HTTP {}", resp.status());
        }

        let body = resp.text().await?;
        let values: Vec<serde_json::Value> = match serde_json::from_str(&body) {
            Ok(array) => array,
            Err(_) => serde_json::from_str::<CollectionResponse>(&body)?.documents,
        };

        let mut records = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<RequestRecord>(value) {
                Ok(rec) if !rec.id.is_empty() => records.push(rec),
                Ok(_) => tracing::warn!("Skipping document without an id"),
                Err(e) => tracing::warn!("Skipping malformed document: {e}"),
            }
        }
        Ok(records)
    }

    /// Persist a status label for a record into the status collection.
    pub async fn push_status(&self, record_id: &str, label: &str) -> anyhow::Result<()> {
        let url = format!("{}/{}/{}", self.base_url, STATUS_COLLECTION, record_id);
        let resp = self
            .client
            .put(&url)
            .json(&serde_json::json!({ "status": label }))
            .send()
            .await?;

        if !resp.status().is_success() {
            anyhow::bail!("Failed to push status: HTTP {}", resp.status());
        }
        Ok(())
    }
}

/// Best-effort status write-back: failures are logged, never surfaced.
pub async fn push_status_quietly(source: &RecordSource, record_id: &str, label: &str) {
    if let Err(e) = source.push_status(record_id, label).await {
        tracing::warn!("Could not persist status for {record_id}: {e}");
    }
}
