//! Turn CodeDeploy SNS notifications into chat webhook messages.

pub mod cli;
pub mod config;
pub mod envelope;
pub mod error;
pub mod message;
pub mod pipeline;
pub mod sink;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use envelope::{decode, DeploymentEvent, InboundEnvelope};
pub use error::{DeliveryError, NotifyError};
pub use message::{build_message, Attachment, Color, OutboundMessage};
pub use sink::{MessageSink, WebhookSink};
