use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Runtime;

use deploynotify::cli::{Cli, Commands};
use deploynotify::config::webhook_url;
use deploynotify::pipeline::{handle, render};
use deploynotify::sink::WebhookSink;
use deploynotify::telemetry::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_json)?;

    match cli.command {
        Commands::Notify { event, webhook_url: flag } => {
            // Configuration is checked before the event is read.
            let url = webhook_url(flag.as_deref(), cli.config.clone())?;
            let sink = WebhookSink::new(url);

            let payload = read_event(&event)?;
            let rt = Runtime::new()?;
            let message = rt
                .block_on(handle(&payload, &sink))
                .context("Delivering deployment notification")?;
            println!("{}", message.to_json()?);
        }
        Commands::Render { event } => {
            let payload = read_event(&event)?;
            let message = render(&payload).context("Rendering deployment notification")?;
            println!("{}", serde_json::to_string_pretty(&message)?);
        }
        Commands::Version { json } => {
            if json {
                let info = serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "commit": option_env!("GIT_SHA").unwrap_or("unknown"),
                    "build_date": option_env!("BUILD_DATE").unwrap_or("unknown"),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "deploynotify {} (commit: {}, built: {})",
                    env!("CARGO_PKG_VERSION"),
                    option_env!("GIT_SHA").unwrap_or("unknown"),
                    option_env!("BUILD_DATE").unwrap_or("unknown"),
                );
            }
        }
    }
    Ok(())
}

fn read_event(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Reading event from stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("Reading event file {}", path.display()))
}
