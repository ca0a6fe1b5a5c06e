use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
