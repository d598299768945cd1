use std::collections::HashMap;
use std::sync::Arc;

use crate::courier::{CourierConnector, OrderRequest};
use crate::error::AppError;
use crate::source::{RecordSource, push_status_quietly};
use crate::store::Store;
use crate::view::columns::PLACEHOLDER;

pub async fn dispatch(
    store: &Store,
    source: &RecordSource,
    connectors: &HashMap<String, Arc<dyn CourierConnector>>,
    id: &str,
    courier: Option<&str>,
    cod_amount: f64,
    note: Option<&str>,
) -> anyhow::Result<()> {
    let record = store
        .get_request(id)?
        .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

    let order = OrderRequest {
        invoice: format!("INV-{id}"),
        recipient_name: record
            .customer_name
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        recipient_phone: record
            .phone_number
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        recipient_address: record
            .address
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        cod_amount,
        note: note.map(String::from),
        courier: courier.map(String::from).or_else(|| record.courier.clone()),
    };

    let courier_id = order.courier_id();
    let connector = connectors
        .get(courier_id)
        .ok_or_else(|| AppError::CourierNotFound(courier_id.to_string()))?;

    println!("Submitting order {} to {}...", order.invoice, connector.name());
    match connector.submit(&order).await {
        Ok(data) => {
            println!("  Accepted: {data}");
            let label = format!("Dispatched via {}", connector.name());
            store.set_status(id, &label)?;
            push_status_quietly(source, id, &label).await;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Dispatch to {} failed: {}", connector.name(), e);
            anyhow::bail!("Dispatch failed: {e}")
        }
    }
}
