use thiserror::Error;

/// Errors that can occur when talking to the GIPHY API.
#[derive(Debug, Error)]
pub enum GiphyError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API key rejected ({status_code}): {message}")]
    Auth { status_code: u16, message: String },

    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    #[error("Invalid response body at {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
