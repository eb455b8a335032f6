use crate::model::user::Role;
use serde::{Deserialize, Serialize};

/// Denormalized snapshot of the authenticated user, taken at login or signup
/// time and stored against the session identifier. This is a point-in-time
/// copy, not a live reference: role changes made by an admin do not show up
/// in an already-issued session until that user authenticates again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
