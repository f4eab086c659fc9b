pub mod dto;
pub mod handlers;
pub mod privacy;
pub mod sync;
pub mod telemetry;

use crate::state::AppState;
use axum::Router;

pub use privacy::PrivacyOps;
pub use sync::OfflineSync;
pub use telemetry::TelemetryIngest;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::ops_routes())
}
