use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{today, CoachCard, CoachRequest},
    services::default_daily_card,
};
use crate::{error::not_found, payload::Payload, state::AppState};

pub fn coach_routes() -> Router<AppState> {
    Router::new().route(
        "/coach/card",
        get(todays_default_card)
            .post(coach_card)
            .fallback(not_found),
    )
}

#[instrument(skip(state, payload))]
pub async fn coach_card(
    State(state): State<AppState>,
    Payload(payload): Payload<CoachRequest>,
) -> Json<CoachCard> {
    let card = state.agents.coach.generate(&payload);
    info!(category = ?card.category, day = %card.generated_for, "coach card generated");
    Json(card)
}

#[instrument]
pub async fn todays_default_card() -> Json<CoachCard> {
    Json(default_daily_card(today()))
}
