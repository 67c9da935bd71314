mod backend;
mod error;
mod http;
mod service;

pub use self::backend::BackendError;
pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::service::ServiceError;
