use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{NutritionResolverRequest, ProductScanRequest, ProductScanResult},
    NutritionResolver,
};
use crate::{
    error::{not_found, ApiError},
    payload::Payload,
    state::AppState,
};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/scan/product", post(scan_product).fallback(not_found))
        .route("/product/resolve", post(resolve_product).fallback(not_found))
}

#[instrument(skip(state, payload))]
pub async fn scan_product(
    State(state): State<AppState>,
    Payload(payload): Payload<ProductScanRequest>,
) -> Result<Json<ProductScanResult>, ApiError> {
    let result = state.agents.product_scanner.scan(&payload).map_err(|e| {
        warn!(error = %e, "product scan rejected");
        ApiError::from(e)
    })?;
    info!(strategy = ?result.lookup_strategy, name = %result.candidate.name, "product scanned");
    Ok(Json(result))
}

#[instrument(skip(state, payload))]
pub async fn resolve_product(
    State(state): State<AppState>,
    Payload(payload): Payload<NutritionResolverRequest>,
) -> impl IntoResponse {
    let score = state.agents.nutrition_resolver.resolve(&payload);
    let ttl = NutritionResolver::cache_ttl(&score);
    info!(
        locale = %payload.locale,
        name = %score.name,
        health_score = score.health_score,
        "product resolved"
    );
    (
        [(
            header::CACHE_CONTROL,
            format!("max-age={}", ttl.whole_seconds()),
        )],
        Json(score),
    )
}
