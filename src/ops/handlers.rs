use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{
    OfflineSyncRequest, OfflineSyncResult, PrivacyRequest, PrivacyResponse, TelemetryEvent,
    TelemetryResponse,
};
use crate::{error::not_found, payload::Payload, state::AppState};

pub fn ops_routes() -> Router<AppState> {
    Router::new()
        .route("/sync/offline", post(offline_sync).fallback(not_found))
        .route("/privacy", post(privacy).fallback(not_found))
        .route("/telemetry", post(telemetry).fallback(not_found))
}

#[instrument(skip(state, payload))]
pub async fn offline_sync(
    State(state): State<AppState>,
    Payload(payload): Payload<OfflineSyncRequest>,
) -> Json<OfflineSyncResult> {
    let result = state.agents.offline_sync.flush(&payload);
    info!(
        queue_size = payload.queue_size,
        flushed = result.flushed,
        "offline queue flush"
    );
    Json(result)
}

#[instrument(skip(state, payload))]
pub async fn privacy(
    State(state): State<AppState>,
    Payload(payload): Payload<PrivacyRequest>,
) -> Json<PrivacyResponse> {
    Json(state.agents.privacy_ops.handle(&payload))
}

#[instrument(skip(state, payload))]
pub async fn telemetry(
    State(state): State<AppState>,
    Payload(payload): Payload<TelemetryEvent>,
) -> Json<TelemetryResponse> {
    Json(state.agents.telemetry.ingest(&payload))
}
