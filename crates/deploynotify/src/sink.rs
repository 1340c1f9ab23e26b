//! Webhook delivery.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::error::DeliveryError;
use crate::message::OutboundMessage;

/// Destination for rendered messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver one message. Called at most once per invocation and never retried.
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}

/// Posts messages as JSON to an incoming-webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    url: Url,
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(url: Url) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    pub fn with_client(url: Url, client: reqwest::Client) -> Self {
        Self { url, client }
    }
}

#[async_trait]
impl MessageSink for WebhookSink {
    async fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let resp = self
            .client
            .post(self.url.clone())
            .json(message)
            .send()
            .await
            .map_err(DeliveryError::Transport)?;

        // Only a plain 200 counts; other 2xx codes are rejected too.
        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "webhook rejected message");
            return Err(DeliveryError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
