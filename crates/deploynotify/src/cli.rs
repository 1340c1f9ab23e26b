use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Deploynotify – post deployment status notifications to a chat webhook
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode an event, render it and post it to the webhook
    Notify {
        /// Envelope JSON file ("-" reads stdin)
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        event: PathBuf,

        /// Webhook URL (overrides SLACK_WEBHOOK and the config file)
        #[arg(long, value_name = "URL")]
        webhook_url: Option<String>,
    },
    /// Decode and render an event without sending it
    Render {
        /// Envelope JSON file ("-" reads stdin)
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        event: PathBuf,
    },
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
