//! HTTP client for the chat webhook (one JSON POST per message).

use serde::Deserialize;
use thiserror::Error;

use crate::session::Session;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("could not reach webhook: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook reply was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Webhook reply body. Any shape without a `response` field decodes to `None`.
#[derive(Debug, Deserialize)]
struct ReplyBody {
    response: Option<String>,
}

pub struct WebhookClient {
    endpoint: String,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(endpoint: String) -> Self {
        // No request timeout: the transport's own limits are the only bound.
        Self { endpoint, client: reqwest::Client::new() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one user message; returns the bot reply text if the payload
    /// carried one.
    pub async fn send(&self, text: &str, session: &Session) -> Result<Option<String>, WebhookError> {
        let body = serde_json::json!({
            "message": text,
            "user_phone": session.user_phone(),
            "origin": session.origin(),
        });
        let resp = self.client.post(&self.endpoint).json(&body).send().await?;
        if !resp.status().is_success() {
            return Err(WebhookError::Status(resp.status()));
        }
        let reply: ReplyBody = resp.json().await.map_err(WebhookError::Decode)?;
        Ok(reply.response)
    }
}
