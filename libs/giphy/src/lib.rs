//! GIPHY API client library
//!
//! Provides a typed client for the GIPHY v1 HTTP API.

mod client;
mod error;
pub mod models;
mod trending;

pub use client::{ApiKey, GiphyClient};
pub use error::GiphyError;
pub use models::{Gif, GifImages, ImageVariant, TrendingResponse};

pub type Result<T> = std::result::Result<T, GiphyError>;
