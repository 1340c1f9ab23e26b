//! Inbound SNS envelope and the deployment event embedded in it.
//!
//! The envelope is decoded in two passes: the outer `Records` document, then
//! the first record's `Message`, which is itself a JSON document serialized
//! into a string.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::NotifyError;

/// Statuses rendered as failures. Everything else is treated as success.
const FAILURE_STATUSES: [&str; 2] = ["FAILED", "ABORTED"];

/// Outer document. Records stay untyped until picked so that anything after
/// the first one is never interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundEnvelope {
    #[serde(rename = "Records")]
    pub records: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "Sns")]
    pub sns: Notification,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notification {
    #[serde(rename = "Type", default)]
    pub kind: String,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
    /// Serialized [`DeploymentEvent`]. A missing message fails as a payload error.
    #[serde(rename = "Message", default)]
    pub message: String,
}

/// CodeDeploy deployment status notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentEvent {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub event_trigger_name: String,
    pub application_name: String,
    pub deployment_id: String,
    #[serde(default)]
    pub deployment_group_name: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub complete_time: String,
    pub status: String,
}

impl InboundEnvelope {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, NotifyError> {
        serde_json::from_slice(bytes).map_err(NotifyError::EnvelopeParse)
    }

    /// The only record that is ever inspected.
    pub fn first_record(&self) -> Result<Record, NotifyError> {
        let first = self.records.first().ok_or(NotifyError::EmptyEnvelope)?;
        Record::deserialize(first).map_err(NotifyError::EnvelopeParse)
    }
}

impl FromStr for InboundEnvelope {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl Notification {
    pub fn deployment_event(&self) -> Result<DeploymentEvent, NotifyError> {
        serde_json::from_str(&self.message).map_err(NotifyError::PayloadParse)
    }
}

impl DeploymentEvent {
    pub fn is_failure(&self) -> bool {
        is_failure_status(&self.status)
    }
}

pub(crate) fn is_failure_status(status: &str) -> bool {
    FAILURE_STATUSES.contains(&status)
}

/// Decode a raw invocation payload into the deployment event carried by its
/// first record. Records after the first are ignored.
pub fn decode(bytes: &[u8]) -> Result<DeploymentEvent, NotifyError> {
    let envelope = InboundEnvelope::from_slice(bytes)?;
    let record = envelope.first_record()?;
    let event = record.sns.deployment_event()?;
    tracing::debug!(
        records = envelope.records.len(),
        sns_type = %record.sns.kind,
        sns_timestamp = %record.sns.timestamp,
        "decoded envelope"
    );
    Ok(event)
}
