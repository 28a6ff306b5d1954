use std::sync::Arc;

use parking_lot::RwLock;
use reqwest::Client;

use crate::error::GiphyError;

const BASE_URL: &str = "https://api.giphy.com/v1";

/// Shared API key that can be updated at runtime.
pub type ApiKey = Arc<RwLock<String>>;

pub struct GiphyClient {
    client: Client,
    api_key: ApiKey,
}

impl GiphyClient {
    /// Create a GiphyClient with a reqwest Client and a shared API key.
    pub fn new(client: Client, api_key: ApiKey) -> Self {
        Self { client, api_key }
    }

    /// Create a GiphyClient with a fixed API key.
    pub fn with_key(client: Client, key: impl Into<String>) -> Self {
        Self::new(client, Arc::new(RwLock::new(key.into())))
    }

    /// Get the current API key.
    pub(crate) fn api_key(&self) -> String {
        self.api_key.read().clone()
    }

    /// Get the HTTP client for making requests.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let status_code = status.as_u16();
            // 401/403 means the key was rejected; everything else is a
            // generic API failure.
            return Err(if matches!(status_code, 401 | 403) {
                GiphyError::Auth {
                    status_code,
                    message: body,
                }
            } else {
                GiphyError::Api {
                    status_code,
                    message: body,
                }
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| GiphyError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
