use tracing::info;
use tracing_subscriber::EnvFilter;
use webgate_domain::LoggingConfig;

/// `RUST_LOG` wins over the configured level when set. Logs go to stderr so
/// command output on stdout stays machine-readable.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Logging initialized at level: {}", config.level);
}
