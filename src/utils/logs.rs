use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(filter))
        .init();
}
