use reqwest::Error as ReqwestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request error: {0}")]
    Http(#[from] ReqwestError),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Not found")]
    NotFound,
}

impl BackendError {
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            BackendError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
