use crate::model::user::{Role, User};
use serde::Serialize;

/// Admin-facing view of a user record; the password hash never leaves the
/// repository layer through this type.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}
