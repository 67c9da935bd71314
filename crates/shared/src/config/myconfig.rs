use crate::config::{BackendConfig, MediaConfig};
use anyhow::{Context, Result, anyhow};
use std::time::Duration;

const DEFAULT_OTEL_ENDPOINT: &str = "http://otel-collector:4317";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CART_IDLE_TIMEOUT_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend: BackendConfig,
    pub media: MediaConfig,
    pub cart_idle_timeout: Duration,
    pub otel_endpoint: String,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;
        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let backend_url =
            std::env::var("BACKEND_URL").context("Missing environment variable: BACKEND_URL")?;
        let anon_key = std::env::var("BACKEND_ANON_KEY")
            .context("Missing environment variable: BACKEND_ANON_KEY")?;

        let timeout_secs = match std::env::var("BACKEND_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .context("BACKEND_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => DEFAULT_BACKEND_TIMEOUT_SECS,
        };

        let cart_idle_secs = match std::env::var("CART_IDLE_TIMEOUT_SECS") {
            Ok(value) => value
                .parse::<u64>()
                .context("CART_IDLE_TIMEOUT_SECS must be a valid u64 integer")?,
            Err(_) => DEFAULT_CART_IDLE_TIMEOUT_SECS,
        };

        let upload_url = std::env::var("MEDIA_UPLOAD_URL")
            .context("Missing environment variable: MEDIA_UPLOAD_URL")?;
        let upload_preset = std::env::var("MEDIA_UPLOAD_PRESET")
            .context("Missing environment variable: MEDIA_UPLOAD_PRESET")?;

        let otel_endpoint =
            std::env::var("OTEL_ENDPOINT").unwrap_or_else(|_| DEFAULT_OTEL_ENDPOINT.to_string());

        let is_dev = parse_flag("DEV_MODE")?;
        let enable_file_log = parse_flag("ENABLE_FILE_LOG")?;

        Ok(Self {
            port,
            backend: BackendConfig::new(
                backend_url,
                anon_key,
                Duration::from_secs(timeout_secs),
            ),
            media: MediaConfig::new(upload_url, upload_preset),
            cart_idle_timeout: Duration::from_secs(cart_idle_secs),
            otel_endpoint,
            is_dev,
            enable_file_log,
        })
    }
}

fn parse_flag(name: &str) -> Result<bool> {
    match std::env::var(name) {
        Err(_) => Ok(false),
        Ok(value) => match value.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
        },
    }
}
