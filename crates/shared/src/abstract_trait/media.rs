use crate::errors::BackendError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMediaUpload = Arc<dyn MediaUploadTrait + Send + Sync>;

#[async_trait]
pub trait MediaUploadTrait {
    /// Uploads an image and returns its hosted URL.
    async fn upload_image(
        &self,
        file_name: &str,
        content_type: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<String, BackendError>;
}
