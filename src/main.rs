use std::sync::Arc;

use recs_console::{
    api::{create_router, AppState},
    config::Config,
    services::HttpTransport,
};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recs_console=info,tower_http=info"));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = Config::from_env()?;

    // Initialize application state
    let transport = Arc::new(HttpTransport::new(&config.api_url));
    let state = AppState::new(transport, config.response_ordering())?;

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        api_url = %config.api_url,
        ordering = ?config.response_ordering(),
        "Recommendation console running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
