use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::{CourierConnector, OrderRequest};
use crate::config::PathaoConfig;

const CREATE_ORDER_URL: &str = "https://api-hermes.pathao.com/aladdin/api/v1/orders";

/// Pathao merchant create-order forwarder. Bearer-token auth; the store id
/// is optional and omitted from the payload when not configured.
pub struct PathaoCourier {
    client: Client,
    config: PathaoConfig,
}

impl PathaoCourier {
    pub fn new(config: PathaoConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn payload(&self, order: &OrderRequest) -> serde_json::Value {
        let mut payload = json!({
            "merchant_order_id": order.invoice,
            "recipient_name": order.recipient_name,
            "recipient_phone": order.recipient_phone,
            "recipient_address": order.recipient_address,
            "amount_to_collect": order.cod_amount,
            "special_instruction": order.note,
            "item_quantity": 1,
            "item_type": 2,
            "delivery_type": 48,
        });
        if let Some(store_id) = &self.config.store_id {
            payload["store_id"] = json!(store_id);
        }
        payload
    }
}

#[async_trait]
impl CourierConnector for PathaoCourier {
    fn id(&self) -> &str {
        "pathao"
    }

    fn name(&self) -> &str {
        "Pathao"
    }

    async fn submit(&self, order: &OrderRequest) -> anyhow::Result<serde_json::Value> {
        let resp = self
            .client
            .post(CREATE_ORDER_URL)
            .bearer_auth(&self.config.access_token)
            .header("Accept", "application/json")
            .json(&self.payload(order))
            .send()
            .await?;

        let status = resp.status();
        let body: serde_json::Value = resp.json().await.unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            anyhow::bail!("Pathao returned HTTP {status}: {body}");
        }
        Ok(body)
    }
}
