use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod models;
mod provider;
mod routes;
mod service;

use config::Config;
use provider::StaticProvider;
use routes::{create_router, AppState};
use service::WeatherService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    let default_filter = if config.api_debug {
        "weather_app_server=debug,tower_http=debug"
    } else {
        "weather_app_server=warn,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Wire up the service explicitly; the routing layer receives it as state.
    let provider = Arc::new(StaticProvider::new());
    let service = Arc::new(WeatherService::new(provider));
    let config = Arc::new(config);

    let state = AppState {
        config: config.clone(),
        service,
    };

    let app: Router = create_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        "Weather API listening on http://{} (docs at /docs)",
        config.bind_addr()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
