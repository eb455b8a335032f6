use crate::{errors::service::ServiceError, view};
use axum::response::{IntoResponse, Response};
use tracing::error;

/// Terminal error for a request. Everything that reaches this type is an
/// infrastructure failure (store unreachable, hashing failure, template
/// failure); the client only ever sees the generic error page, while the
/// detail goes to the operator log.
#[derive(Debug)]
pub struct HttpError {
    detail: String,
}

impl HttpError {
    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        Self::internal(err.to_string())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        error!("❌ Request failed: {}", self.detail);
        view::internal_error_page()
    }
}
