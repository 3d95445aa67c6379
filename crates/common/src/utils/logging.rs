use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber for the registry service.
/// `RUST_LOG` overrides the default filter; output goes to stdout so
/// container setups that swallow stderr still show request logs.
pub fn init_logging_default() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info,axum=info"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}
