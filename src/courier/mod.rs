pub mod pathao;
pub mod steadfast;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::CourierSettings;

/// Courier used when a submission does not name one.
pub const DEFAULT_COURIER: &str = "steadfast";

/// Order payload forwarded to a courier service. Same shape on the proxy
/// wire and on the connector input; no validation happens here beyond what
/// the courier itself enforces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub invoice: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub recipient_address: String,
    #[serde(default)]
    pub cod_amount: f64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub courier: Option<String>,
}

impl OrderRequest {
    pub fn courier_id(&self) -> &str {
        self.courier
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COURIER)
    }
}

#[async_trait]
pub trait CourierConnector: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    /// Forward the order and return the courier's response body as-is.
    async fn submit(&self, order: &OrderRequest) -> anyhow::Result<serde_json::Value>;
}

/// Build the map of couriers this deployment can dispatch through. Services
/// without credentials in the environment are left out and logged.
pub fn build_courier_registry(
    settings: &CourierSettings,
) -> HashMap<String, Arc<dyn CourierConnector>> {
    let mut map: HashMap<String, Arc<dyn CourierConnector>> = HashMap::new();

    match &settings.steadfast {
        Some(config) => {
            let connector = Arc::new(steadfast::SteadfastCourier::new(config.clone()));
            map.insert(connector.id().to_string(), connector);
        }
        None => tracing::warn!("Steadfast credentials not configured; connector disabled"),
    }

    match &settings.pathao {
        Some(config) => {
            let connector = Arc::new(pathao::PathaoCourier::new(config.clone()));
            map.insert(connector.id().to_string(), connector);
        }
        None => tracing::warn!("Pathao credentials not configured; connector disabled"),
    }

    map
}

#[cfg(test)]
pub(crate) fn test_settings() -> CourierSettings {
    use crate::config::{PathaoConfig, SteadfastConfig};
    CourierSettings {
        steadfast: Some(SteadfastConfig {
            api_key: "test-api-key".into(),
            secret_key: "test-secret-key".into(),
        }),
        pathao: Some(PathaoConfig {
            access_token: "test-token".into(),
            store_id: Some("store-1".into()),
        }),
    }
}
