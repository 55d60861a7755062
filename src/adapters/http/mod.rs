//! Inbound HTTP adapter. axum router wiring.

pub mod handlers;

use crate::usecases::CampaignService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CampaignService>,
    pub cohere_configured: bool,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/generate-campaigns/", post(handlers::generate_campaigns))
        .route(
            "/export-campaigns-csv/",
            post(handlers::export_campaigns_csv),
        )
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
