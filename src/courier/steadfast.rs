use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use super::{CourierConnector, OrderRequest};
use crate::config::SteadfastConfig;

const CREATE_ORDER_URL: &str = "https://portal.packzy.com/api/v1/create_order";

/// Steadfast (packzy portal) create-order forwarder. Authenticates with the
/// `Api-Key`/`Secret-Key` header pair.
pub struct SteadfastCourier {
    client: Client,
    config: SteadfastConfig,
}

impl SteadfastCourier {
    pub fn new(config: SteadfastConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn payload(order: &OrderRequest) -> serde_json::Value {
        json!({
            "invoice": order.invoice,
            "recipient_name": order.recipient_name,
            "recipient_phone": order.recipient_phone,
            "recipient_address": order.recipient_address,
            "cod_amount": order.cod_amount,
            "note": order.note,
        })
    }
}

#[async_trait]
impl CourierConnector for SteadfastCourier {
    fn id(&self) -> &str {
        "steadfast"
    }

    fn name(&self) -> &str {
        "Steadfast"
    }

    async fn submit(&self, order: &OrderRequest) -> anyhow::Result<serde_json::Value> {
        let resp = self
            .client
            .post(CREATE_ORDER_URL)
            .header("Api-Key", &self.config.api_key)
            .header("Secret-Key", &self.config.secret_key)
            .json(&Self::payload(order))
            .send()
            .await?;

        let status = resp.status();
        let body: serde_json::Value = resp.json().await.unwrap_or_else(|_| json!({}));

        if !status.is_success() {
            anyhow::bail!("Steadfast returned HTTP {status}: {body}");
        }
        Ok(body)
    }
}
