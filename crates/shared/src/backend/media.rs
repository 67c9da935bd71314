use crate::{abstract_trait::MediaUploadTrait, config::MediaConfig, errors::BackendError};
use async_trait::async_trait;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone)]
pub struct MediaUploader {
    http: Client,
    config: MediaConfig,
}

impl MediaUploader {
    pub fn new(http: Client, config: MediaConfig) -> Self {
        Self { http, config }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    #[serde(default)]
    secure_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[async_trait]
impl MediaUploadTrait for MediaUploader {
    async fn upload_image(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, BackendError> {
        info!("Uploading image {file_name} ({} bytes)", bytes.len());

        let mut part = Part::bytes(bytes).file_name(file_name.to_string());
        if let Some(mime) = content_type {
            part = part.mime_str(mime)?;
        }

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", self.config.upload_preset.clone());

        let response = self
            .http
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        let uploaded: UploadResponse = crate::backend::BackendClient::read_json(response).await?;

        uploaded
            .secure_url
            .or(uploaded.url)
            .ok_or_else(|| BackendError::Decode("upload response carried no url".into()))
    }
}
