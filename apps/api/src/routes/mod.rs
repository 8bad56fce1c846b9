pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::holidays;
use crate::generation::handlers as generation;
use crate::oracle::handlers as oracle;
use crate::state::AppState;
use crate::telegram;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Oracle API
        .route("/api/oracle/reading", post(oracle::handle_reading))
        .route("/api/oracle/daily-card", post(oracle::handle_daily_card))
        .route("/api/holidays", get(holidays::handle_upcoming))
        // Sketch generation API
        .route(
            "/api/generate-sketch",
            post(generation::handle_generate_sketch).get(generation::handle_sketch_status),
        )
        // Bot glue
        .route("/api/telegram-webhook", post(telegram::handle_webhook))
        .with_state(state)
}
