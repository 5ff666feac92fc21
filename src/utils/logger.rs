use std::env;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.
///
/// `STATUSLINE_LOG` takes an `EnvFilter` directive; otherwise
/// `STATUSLINE_DEBUG` turns on debug output and the default is `warn`.
pub fn init_logging() {
    let filter = match env::var("STATUSLINE_LOG") {
        Ok(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn")),
        Err(_) if env::var("STATUSLINE_DEBUG").is_ok() => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
