mod http;
mod repository;
mod service;

pub use http::HttpError;
pub use repository::RepositoryError;
pub use service::ServiceError;
