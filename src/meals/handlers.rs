use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{MealScanRequest, MealScanResult};
use crate::{error::not_found, payload::Payload, state::AppState};

pub fn meal_routes() -> Router<AppState> {
    Router::new().route("/scan/meal", post(scan_meal).fallback(not_found))
}

#[instrument(skip(state, payload), fields(hints = payload.hints.len()))]
pub async fn scan_meal(
    State(state): State<AppState>,
    Payload(payload): Payload<MealScanRequest>,
) -> Json<MealScanResult> {
    let result = state.agents.meal_estimator.estimate(&payload);
    info!(
        locale = %payload.locale,
        preferences = payload.preferences.len(),
        total_calories = result.total_calories,
        "meal scanned"
    );
    Json(result)
}
