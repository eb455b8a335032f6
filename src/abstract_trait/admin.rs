use crate::{domain::response::user::UserResponse, errors::ServiceError, model::user::Role};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserAdminService = Arc<dyn UserAdminServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserAdminServiceTrait {
    async fn list_users(&self) -> Result<Vec<UserResponse>, ServiceError>;

    /// Last-writer-wins; setting the role of an id that matches nothing is a
    /// no-op, not an error.
    async fn set_role(&self, user_id: i32, role: Role) -> Result<(), ServiceError>;
}
