use crate::errors::{backend::BackendError, error::ErrorResponse, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Backend(backend_err) => match backend_err {
                BackendError::Api { status, message } => match status {
                    401 | 403 => HttpError::Unauthorized(message),
                    404 => HttpError::NotFound(message),
                    409 => HttpError::Conflict(message),
                    400..=499 => HttpError::BadRequest(message),
                    _ => HttpError::ServiceUnavailable(message),
                },
                BackendError::Http(err) => HttpError::ServiceUnavailable(err.to_string()),
                BackendError::NotFound => HttpError::NotFound("Not found".into()),
                BackendError::Decode(msg) => HttpError::Internal(msg),
            },

            ServiceError::Validation(msg) => HttpError::BadRequest(msg),
            ServiceError::Unauthorized(msg) => HttpError::Unauthorized(msg),
            ServiceError::Forbidden(msg) => HttpError::Forbidden(msg),
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::OutOfStock => HttpError::Conflict(ServiceError::OutOfStock.to_string()),
            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl HttpError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let msg = match self {
            HttpError::BadRequest(msg)
            | HttpError::Unauthorized(msg)
            | HttpError::Forbidden(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::Internal(msg) => msg,
        };

        (status, Json(ErrorResponse::error(msg))).into_response()
    }
}
