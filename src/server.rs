use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::courier::{CourierConnector, OrderRequest};
use crate::error::AppError;

/// Stateless proxy in front of the courier APIs: it looks up a connector by
/// the `courier` discriminator and forwards, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub couriers: Arc<HashMap<String, Arc<dyn CourierConnector>>>,
}

pub fn router(couriers: HashMap<String, Arc<dyn CourierConnector>>) -> Router {
    let state = AppState {
        couriers: Arc::new(couriers),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/submitorder", post(submit_order))
        .layer(cors)
        .with_state(state)
}

async fn submit_order(
    State(state): State<AppState>,
    Json(order): Json<OrderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let courier_id = order.courier_id();
    let connector = state
        .couriers
        .get(courier_id)
        .ok_or_else(|| AppError::CourierNotFound(courier_id.to_string()))?;

    tracing::info!("Forwarding order {} to {}", order.invoice, connector.name());
    match connector.submit(&order).await {
        Ok(data) => Ok(Json(json!({
            "message": "Order submitted successfully",
            "data": data,
        }))),
        Err(e) => Err(AppError::CourierRejected(e.to_string())),
    }
}

pub async fn serve(
    addr: SocketAddr,
    couriers: HashMap<String, Arc<dyn CourierConnector>>,
) -> anyhow::Result<()> {
    if couriers.is_empty() {
        return Err(AppError::Config(
            "No courier credentials configured; set STEADFAST_API_KEY/STEADFAST_SECRET_KEY or PATHAO_ACCESS_TOKEN".into(),
        )
        .into());
    }

    let app = router(couriers);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Courier proxy listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
