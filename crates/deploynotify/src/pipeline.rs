//! Per-invocation flow: decode, render, deliver.

use crate::envelope::decode;
use crate::error::NotifyError;
use crate::message::{build_message, OutboundMessage};
use crate::sink::MessageSink;

/// Decode and render without delivering.
pub fn render(payload: &[u8]) -> Result<OutboundMessage, NotifyError> {
    let event = decode(payload)?;
    tracing::info!(
        application = %event.application_name,
        deployment_id = %event.deployment_id,
        deployment_group = %event.deployment_group_name,
        status = %event.status,
        region = %event.region,
        failed = event.is_failure(),
        "received deployment event"
    );
    Ok(build_message(&event))
}

/// Handle one invocation end to end. Returns the message that was delivered.
///
/// At most one delivery attempt is made; any failure aborts the invocation.
pub async fn handle<S>(payload: &[u8], sink: &S) -> Result<OutboundMessage, NotifyError>
where
    S: MessageSink + ?Sized,
{
    let message = render(payload)?;
    sink.deliver(&message).await?;
    tracing::info!("notification has been sent");
    Ok(message)
}
