use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>, timeout: Duration) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
            timeout,
        }
    }
}

pub struct HttpClientFactory;

impl HttpClientFactory {
    pub fn build(timeout: Duration) -> Result<Client> {
        info!("Creating backend http client (timeout: {}s)", timeout.as_secs());

        Client::builder()
            .connect_timeout(Duration::from_secs(3))
            .timeout(timeout)
            .build()
            .context("Failed to build backend http client")
    }
}
