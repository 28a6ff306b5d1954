use std::sync::Arc;

use async_trait::async_trait;
use giphy::{Gif, GiphyClient, GiphyError, TrendingResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("GIPHY API error: {0}")]
    Giphy(#[from] GiphyError),
}

/// Trait for fetching the trending feed.
///
/// Allows tests to substitute a fake fetcher for the HTTP client.
#[async_trait]
pub trait TrendingFetcher: Send + Sync {
    async fn fetch_trending(&self) -> Result<TrendingResponse, GiphyError>;
}

#[async_trait]
impl TrendingFetcher for GiphyClient {
    async fn fetch_trending(&self) -> Result<TrendingResponse, GiphyError> {
        self.trending().await
    }
}

/// Repository for the trending feed.
///
/// Thin seam between the network client and the feed state. Adds no
/// caching and no transformation; the item order is whatever the API
/// returned.
pub struct FeedRepository<F: TrendingFetcher> {
    fetcher: Arc<F>,
}

impl<F: TrendingFetcher> Clone for FeedRepository<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
        }
    }
}

impl<F: TrendingFetcher> FeedRepository<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Fetch the trending feed and unwrap the response envelope.
    pub async fn get_trending(&self) -> Result<Vec<Gif>, FeedError> {
        let response = self.fetcher.fetch_trending().await?;
        Ok(response.data)
    }
}
