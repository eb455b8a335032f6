mod database;
mod hashing;
mod myconfig;

pub use database::{ConnectionManager, ConnectionPool};
pub use hashing::Hashing;
pub use myconfig::Config;
