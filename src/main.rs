//! Wiring & DI. Entry point: bootstrap adapters, inject into the service, serve HTTP.
//! No business logic here; orchestration is delegated to CampaignService.

use dripgen::adapters::ai::CohereAdapter;
use dripgen::adapters::http::{AppState, router};
use dripgen::ports::CopywriterPort;
use dripgen::shared::AppConfig;
use dripgen::usecases::CampaignService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // AppConfig::load also pulls variables.env / .env into the process env
    let cfg = AppConfig::load().unwrap_or_default();

    let Some(api_key) = cfg.cohere_api_key() else {
        anyhow::bail!("Set COHERE_API_KEY (env or variables.env). Get one from https://dashboard.cohere.com");
    };

    let api_url = cfg.cohere_api_url_or_default();
    let model = cfg.cohere_model_or_default();
    info!(api_url = %api_url, model = %model, "Cohere copywriter configured");

    // --- Copywriter: adapter behind the port, injected into the service ---
    let copywriter: Arc<dyn CopywriterPort> = Arc::new(CohereAdapter::new(api_url, api_key, model));
    let service = Arc::new(CampaignService::new(copywriter));

    let app = router(AppState {
        service,
        cohere_configured: cfg.is_cohere_configured(),
    });

    let addr = cfg.bind_addr_or_default();
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!(addr = %addr, "dripgen listening");

    axum::serve(listener, app).await?;

    Ok(())
}
