#[derive(Debug, Clone)]
pub struct MediaConfig {
    pub upload_url: String,
    pub upload_preset: String,
}

impl MediaConfig {
    pub fn new(upload_url: impl Into<String>, upload_preset: impl Into<String>) -> Self {
        Self {
            upload_url: upload_url.into(),
            upload_preset: upload_preset.into(),
        }
    }
}
