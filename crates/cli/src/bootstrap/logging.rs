use iris_das_domain::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout only carries the lookup result.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_new(&config.logging.level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
