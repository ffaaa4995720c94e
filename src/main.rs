use reqwest::Client;
use tokio::net::TcpListener;

// Import modules
mod config;
mod extract_data;
mod fetch_profile;
mod models;
mod routes;
mod scraping;

use routes::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load configuration settings
    let config = match config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState {
        client: Client::new(),
        base_url: config.geeksforgeeks.base_url,
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
