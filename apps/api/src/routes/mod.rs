pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::mcq::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/generate-mcqs", post(handlers::handle_generate_mcqs))
        .route("/api/export-word", post(handlers::handle_export_word))
        .with_state(state)
}
