use crate::model::user::Role;

/// Insert payload for the credential store. `password` is the bcrypt digest,
/// produced by the auth service before this struct is built.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}
