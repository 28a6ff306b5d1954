use crate::models::TrendingResponse;
use crate::GiphyClient;

impl GiphyClient {
    /// Fetch the current trending GIF feed.
    ///
    /// Issues exactly one GET request per call; there is no retry and no
    /// timeout beyond the transport default.
    pub async fn trending(&self) -> crate::Result<TrendingResponse> {
        let url = self.url("/gifs/trending");
        let api_key = self.api_key();

        let response = self
            .client()
            .get(&url)
            .query(&[("api_key", api_key.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
