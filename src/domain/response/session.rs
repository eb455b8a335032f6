use crate::model::session::SessionUser;

/// Result of a successful signup or login: the freshly issued session
/// identifier plus the snapshot it carries.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub session_id: String,
    pub user: SessionUser,
}
