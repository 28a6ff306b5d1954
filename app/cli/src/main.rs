mod config;

use std::sync::Arc;

use feed::{FeedRepository, FeedService};
use giphy::GiphyClient;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load().await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let http_client = reqwest::Client::new();
    let client = Arc::new(GiphyClient::with_key(http_client, config.api_key));
    let service = FeedService::new(FeedRepository::new(client));

    // Refresh failures are logged by the service; the feed stays empty.
    let _ = service.refresh().await;

    match service.current().await {
        Some(items) => {
            tracing::info!("Trending feed: {} items", items.len());
            for item in &items {
                tracing::info!("{} \"{}\" {}", item.id, item.title, item.images.original.url);
            }
        }
        None => {
            tracing::warn!("No feed available");
            std::process::exit(1);
        }
    }
}
