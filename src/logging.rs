use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Console logging, filtered by `RUST_LOG` (default `rent_finder=info`).
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rent_finder=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .init();
}
