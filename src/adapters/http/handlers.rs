//! HTTP handlers. Map service results to responses, errors to status codes.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use chrono::Utc;
use serde::Serialize;

use crate::domain::{CampaignRequest, DomainError};

use super::AppState;

#[debug_handler]
pub async fn generate_campaigns(
    State(state): State<AppState>,
    Json(payload): Json<CampaignRequest>,
) -> Response {
    match state.service.generate_campaigns(payload).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => error_response(e),
    }
}

#[debug_handler]
pub async fn export_campaigns_csv(
    State(state): State<AppState>,
    Json(payload): Json<CampaignRequest>,
) -> Response {
    match state.service.export_campaigns_csv(payload).await {
        Ok(csv) => {
            let filename = format!("campaigns_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename={filename}"),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    version: &'static str,
    cohere_api_configured: bool,
}

#[debug_handler]
pub async fn health_check(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            cohere_api_configured: state.cohere_configured,
        }),
    )
        .into_response()
}

fn error_response(e: DomainError) -> Response {
    tracing::error!("request failed: {e}");
    match e {
        DomainError::Validation { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(e.to_string())).into_response()
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, Json(e.to_string())).into_response(),
    }
}
