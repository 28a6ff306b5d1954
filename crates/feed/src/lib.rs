//! Trending feed core
//!
//! Sits between the GIPHY client and whatever renders the feed: the
//! repository unwraps the wire envelope, the service holds the latest
//! list as observable state and refreshes it asynchronously.

#[cfg(test)]
mod mocks;
mod repository;
mod service;

pub use repository::{FeedError, FeedRepository, TrendingFetcher};
pub use service::FeedService;
