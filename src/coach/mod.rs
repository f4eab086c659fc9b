pub mod dto;
pub mod handlers;
pub mod services;

use crate::state::AppState;
use axum::Router;

pub use services::CoachInsights;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::coach_routes())
}
