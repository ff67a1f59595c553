use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("idme_client=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
