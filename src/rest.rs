use serde::de::DeserializeOwned;
use thiserror::Error;

/// What went wrong while querying a public endpoint. Call sites wrap this in
/// `anyhow` with the exchange name attached; nothing is retried.
#[derive(Debug, Error)]
pub enum RestError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

pub struct RestApi {
    client: reqwest::Client,
}

impl RestApi {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// One blocking-from-the-caller's-point-of-view GET: fetch the URL, check
    /// the status, decode the body as JSON into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RestError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RestError::Status(response.status()));
        }
        let body = response.text().await?;
        let parsed: T = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}

impl Default for RestApi {
    fn default() -> Self {
        Self::new()
    }
}
