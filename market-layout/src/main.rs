use market_layout::config::Config;
use market_layout::network::http::{router, AppState, SharedState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("🚀 Starting market-layout...");

    let config = Config::from_env()?;
    info!("📋 Configuration loaded");

    let addr = config.bind_addr();
    let state: SharedState = Arc::new(AppState::new(config));
    let app = router(state);

    info!("🌐 Layout server starting on {}", addr);
    info!("📊 Stats at http://{}/stats", addr);
    info!("✅ market-layout ready!");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
