use media_search_service::{
    api::{build_router, AppState},
    config::Config,
    search::{EngineClient, SearchService},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "media_search_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;

    tracing::info!(
        "Starting media-search-service v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!(
        endpoint = %config.engine.endpoint(),
        index = %config.engine.index,
        "Search engine target"
    );

    // Construct the one engine client handle; it does not connect yet,
    // so bad credentials surface on the first search rather than here.
    let client = EngineClient::new(&config.engine)?;
    let service = Arc::new(SearchService::new(client));

    let app_state = AppState::new(service);
    let app = build_router(app_state);

    let http_addr = format!("{}:{}", config.server.host, config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;

    tracing::info!("HTTP server listening on http://{}", http_addr);
    tracing::info!("   Search API: http://{}/api/search", http_addr);
    tracing::info!("   Search page: http://{}/search", http_addr);

    let server = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = server => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}
