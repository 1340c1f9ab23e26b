//! Error types surfaced by the notification pipeline.
//!
//! Every variant is terminal for the invocation that produced it. Nothing is
//! retried; the caller decides how to report the failure.

use thiserror::Error;

/// Failures of a single decode, render and deliver pass.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The inbound envelope carried no records.
    #[error("envelope contains no records")]
    EmptyEnvelope,

    /// The outer envelope is not valid JSON or lacks the expected structure.
    #[error("malformed envelope: {0}")]
    EnvelopeParse(#[source] serde_json::Error),

    /// The embedded notification message is not a valid deployment event.
    #[error("malformed deployment event payload: {0}")]
    PayloadParse(#[source] serde_json::Error),

    /// The webhook call failed or was rejected.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Failure to hand a message to the webhook.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The destination answered with anything other than `200 OK`.
    #[error("webhook responded with status {status}")]
    UnexpectedStatus { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, I/O).
    #[error("webhook request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl DeliveryError {
    /// Status code reported by the destination, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            DeliveryError::UnexpectedStatus { status } => Some(*status),
            DeliveryError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}
