mod admin;
mod auth;

pub use admin::UserAdminService;
pub use auth::{AuthService, AuthServiceDeps};
