mod admin;
mod auth;
mod hashing;
mod session;
mod user;

pub use admin::{DynUserAdminService, UserAdminServiceTrait};
pub use auth::{AuthServiceTrait, DynAuthService};
pub use hashing::{DynHashing, HashingTrait};
pub use session::{DynSessionStore, SessionStoreTrait};
pub use user::{DynUserRepository, UserRepositoryTrait};
