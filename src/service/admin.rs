use crate::{
    abstract_trait::{DynUserRepository, UserAdminServiceTrait},
    domain::response::user::UserResponse,
    errors::ServiceError,
    model::user::Role,
};
use async_trait::async_trait;
use tracing::{info, warn};

#[derive(Clone)]
pub struct UserAdminService {
    users: DynUserRepository,
}

impl UserAdminService {
    pub fn new(users: DynUserRepository) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserAdminServiceTrait for UserAdminService {
    async fn list_users(&self) -> Result<Vec<UserResponse>, ServiceError> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn set_role(&self, user_id: i32, role: Role) -> Result<(), ServiceError> {
        let affected = self.users.update_role(user_id, role).await?;

        if affected == 0 {
            // Miss is a no-op; the admin list simply re-renders unchanged.
            warn!("Role update for user {user_id} matched no record");
        } else {
            info!("✅ User {user_id} is now '{role}'");
        }

        Ok(())
    }
}
