use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{WorkoutPlanRequest, WorkoutPlanResult};
use crate::{error::not_found, payload::Payload, state::AppState};

pub fn workout_routes() -> Router<AppState> {
    Router::new().route("/workout/plan", post(workout_plan).fallback(not_found))
}

#[instrument(skip(state, payload))]
pub async fn workout_plan(
    State(state): State<AppState>,
    Payload(payload): Payload<WorkoutPlanRequest>,
) -> Json<WorkoutPlanResult> {
    let plan = state.agents.workout_planner.build_plan(&payload);
    info!(goal = %payload.goal, options = plan.options.len(), "workout plan built");
    Json(plan)
}
