use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{NotifierError, RunNotifier};

/// Posts `{"text": ...}` to an incoming-webhook URL (Teams, Slack and
/// Mattermost all accept this shape).
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl RunNotifier for WebhookNotifier {
    async fn notify(&self, message: &str) -> Result<(), NotifierError> {
        if message.is_empty() {
            return Ok(());
        }

        let response = self
            .client
            .post(&self.url)
            .json(&WebhookPayload { text: message })
            .send()
            .await
            .map_err(|e| NotifierError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotifierError::Rejected(response.status().as_u16()));
        }

        tracing::info!(status = response.status().as_u16(), "Run notification sent");
        Ok(())
    }
}

/// Used when no webhook is configured.
pub struct DisabledNotifier;

#[async_trait]
impl RunNotifier for DisabledNotifier {
    async fn notify(&self, _message: &str) -> Result<(), NotifierError> {
        Ok(())
    }
}
