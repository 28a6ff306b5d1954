//! Mock implementations for testing the feed crate.
//!
//! Provides a canned-result fetcher standing in for the HTTP client, plus
//! a fetcher that never completes for cancellation tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use giphy::{Gif, GifImages, GiphyError, ImageVariant, TrendingResponse};
use parking_lot::Mutex;

use crate::repository::TrendingFetcher;

/// Mock fetcher that returns queued results in order.
pub struct MockFetcher {
    results: Mutex<VecDeque<Result<TrendingResponse, GiphyError>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a successful response with the given items.
    pub fn push_ok(&self, items: Vec<Gif>) {
        self.results
            .lock()
            .push_back(Ok(TrendingResponse { data: items }));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: GiphyError) {
        self.results.lock().push_back(Err(error));
    }
}

#[async_trait]
impl TrendingFetcher for MockFetcher {
    async fn fetch_trending(&self) -> Result<TrendingResponse, GiphyError> {
        self.results
            .lock()
            .pop_front()
            .expect("MockFetcher: no queued result")
    }
}

/// Fetcher whose request never completes.
pub struct PendingFetcher;

#[async_trait]
impl TrendingFetcher for PendingFetcher {
    async fn fetch_trending(&self) -> Result<TrendingResponse, GiphyError> {
        std::future::pending().await
    }
}

/// Build a test item with the given id and title.
pub fn gif(id: &str, title: &str) -> Gif {
    Gif {
        id: id.to_string(),
        title: title.to_string(),
        images: GifImages {
            original: ImageVariant {
                url: format!("http://example.com/{id}/original.gif"),
                width: "480".to_string(),
                height: "270".to_string(),
            },
            fixed_width: ImageVariant {
                url: format!("http://example.com/{id}/200w.gif"),
                width: "200".to_string(),
                height: "113".to_string(),
            },
        },
    }
}
