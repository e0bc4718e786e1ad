pub mod error;
pub mod health;
pub mod receipts;

use crate::core::prelude::*;
use axum::{
    routing::{get, post},
    Router,
};

/// Builds the HTTP router for the receipt API.
///
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(receipts::process))
        .route("/receipts/{id}/points", get(receipts::points))
        .route("/health", get(health::endpoint))
        .with_state(state)
}
