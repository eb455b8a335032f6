use crate::{
    domain::requests::user::CreateUserRequest,
    errors::RepositoryError,
    model::user::{Role, User},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;

/// Credential store. `create_user` expects the password field to already be
/// a hash; plaintext never crosses this seam.
#[async_trait]
pub trait UserRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Returns the number of rows touched; a miss is 0, not an error.
    async fn update_role(&self, user_id: i32, role: Role) -> Result<u64, RepositoryError>;
}
