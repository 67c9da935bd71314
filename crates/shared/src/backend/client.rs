use crate::{config::BackendConfig, errors::BackendError};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

/// Thin wrapper over the backend's REST surface: every request carries the
/// project `apikey` header.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl BackendClient {
    pub fn new(http: Client, config: &BackendConfig) -> Self {
        Self {
            http,
            base_url: config.url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("Backend request: {method} {url}");

        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
    }

    /// Anonymous requests authenticate with the project key itself.
    pub fn anon_request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(&self.anon_key)
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;

        serde_json::from_str::<T>(&body).map_err(|e| {
            error!("Failed to decode backend response: {e}");
            BackendError::Decode(e.to_string())
        })
    }

    pub async fn ensure_success(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Backend request failed")
                .to_string()
        });

        error!("Backend responded with {}: {message}", status.as_u16());

        Err(BackendError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pulls the human readable message out of an error body. Auth, table and
/// media APIs each use a slightly different shape.
pub fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    for key in ["msg", "message", "error_description"] {
        if let Some(text) = value.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }

    match value.get("error") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Object(inner)) => inner
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
