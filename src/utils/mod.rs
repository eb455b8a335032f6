mod logs;
mod validation;

pub use logs::init_logger;
pub use validation::first_validation_message;
