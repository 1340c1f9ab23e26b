use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use reqwest::Url;
use serde::Deserialize;

const DEFAULT_CONFIG_NAME: &str = "deploynotify.toml";

/// Environment variable holding the webhook URL.
pub const WEBHOOK_ENV: &str = "SLACK_WEBHOOK";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from an explicit path, or search upward from current dir
    /// and then the user config dir. A missing file is not an error unless the
    /// path was given explicitly.
    pub fn load(path_override: Option<PathBuf>) -> Result<Self> {
        let path = match path_override {
            Some(p) => p,
            None => match find_upwards(DEFAULT_CONFIG_NAME).or_else(user_config_path) {
                Some(p) => p,
                None => return Ok(Config::default()),
            },
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Reading config file {}", path.display()))?;
        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Parsing TOML config {}", path.display()))?;
        Ok(cfg)
    }
}

/// Pick the webhook URL: explicit flag, then `SLACK_WEBHOOK`, then the config
/// file. The file is only read when neither of the first two yields a URL.
pub fn webhook_url(flag: Option<&str>, config_path: Option<PathBuf>) -> Result<Url> {
    let env = std::env::var(WEBHOOK_ENV).ok();
    resolve_webhook(flag, env.as_deref(), || Config::load(config_path))
}

fn resolve_webhook<F>(flag: Option<&str>, env: Option<&str>, load: F) -> Result<Url>
where
    F: FnOnce() -> Result<Config>,
{
    if let Some(raw) = first_non_empty([flag, env]) {
        return parse_webhook(raw);
    }
    let config = load()?;
    let Some(raw) = first_non_empty([config.webhook_url.as_deref()]) else {
        bail!("No webhook URL configured; pass --webhook-url, set {WEBHOOK_ENV} or add webhook_url to {DEFAULT_CONFIG_NAME}");
    };
    parse_webhook(raw)
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
}

pub fn parse_webhook(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid webhook URL '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("Unsupported webhook URL scheme '{other}'"),
    }
}

fn find_upwards(file_name: &str) -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(file_name);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

fn user_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?
        .join("deploynotify")
        .join(DEFAULT_CONFIG_NAME);
    path.exists().then_some(path)
}
