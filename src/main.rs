mod config;
mod content;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is the normal production case.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "guardpost failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::SiteConfig::from_env().map_err(|e| e.to_string())?;

    let columns = content::ColumnStore::load_dir(&config.content_dir).map_err(|e| e.to_string())?;
    if columns.is_empty() {
        tracing::warn!(dir = %config.content_dir.display(), "no columns loaded; column list will be empty");
    } else {
        tracing::info!(columns = columns.len(), dir = %config.content_dir.display(), "column content loaded");
    }

    let state = state::AppState::new(columns);
    let app = routes::site(state, &config.public_dir)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("failed to bind port {port}: {e}"))?;

    tracing::info!(%port, "guardpost listening");
    axum::serve(listener, app).await.map_err(|e| format!("server failed: {e}"))
}
