use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{MorphologyError, SentenceLemmatizer};

/// Client for the `POST /lemmatize` endpoint of the NLP pipeline service.
/// The service answers with the lemmas joined by spaces.
pub struct HttpSentenceLemmatizer {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct LemmatizeRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct LemmatizeResponse {
    #[serde(default)]
    lemmatized: String,
}

impl HttpSentenceLemmatizer {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SentenceLemmatizer for HttpSentenceLemmatizer {
    async fn lemmatize(&self, text: &str) -> Result<Vec<String>, MorphologyError> {
        let response = self
            .client
            .post(format!("{}/lemmatize", self.base_url))
            .json(&LemmatizeRequest { text })
            .send()
            .await
            .map_err(|e| MorphologyError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MorphologyError::RequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: LemmatizeResponse = response
            .json()
            .await
            .map_err(|e| MorphologyError::InvalidResponse(e.to_string()))?;

        Ok(body
            .lemmatized
            .split_whitespace()
            .map(str::to_owned)
            .collect())
    }
}
