mod session;

pub use session::{AdminSession, AuthSession, CurrentSession, SESSION_COOKIE};
