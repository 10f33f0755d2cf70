use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TextItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TextBody {
    #[serde(default)]
    pub data: Vec<TextItem>,
}

#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FetchError {}

/// Fetches sample text content and normalizes the outcome: non-2xx responses
/// and body parse failures both come back as a `FetchError` message.
pub struct TextFetcher {
    client: reqwest::Client,
    url: String,
}

impl TextFetcher {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn fetch_texts(&self) -> Result<TextBody, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            FetchError::new(format!("An error occurred while fetching the data: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(FetchError::new(format!(
                "An error occurred while fetching the data: HTTP error {}",
                response.status()
            )));
        }

        response.json::<TextBody>().await.map_err(|e| {
            FetchError::new(format!("An error occurred while fetching the data: {}", e))
        })
    }
}
