use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use deploynotify::config::{parse_webhook, WEBHOOK_ENV};
use deploynotify::pipeline::handle;
use deploynotify::sink::WebhookSink;
use deploynotify::telemetry::init_logging;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(1, true)?;

    let raw = std::env::var(WEBHOOK_ENV).map_err(|_| format!("{WEBHOOK_ENV} is not set"))?;
    let sink = WebhookSink::new(parse_webhook(&raw)?);
    let sink = &sink;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let payload = serde_json::to_vec(&event.payload)?;
        handle(&payload, sink).await?;
        Ok::<(), Error>(())
    }))
    .await
}
