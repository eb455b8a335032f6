mod session;
mod user;

pub use session::SessionRepository;
pub use user::UserRepository;
