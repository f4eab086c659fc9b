pub mod dto;
pub mod handlers;
pub mod resolver;
pub mod scanner;

use crate::state::AppState;
use axum::Router;

pub use resolver::NutritionResolver;
pub use scanner::ProductScanner;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::product_routes())
}
