pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use services::WorkoutPlanner;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::workout_routes())
}
