use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `tracing` filter directive.
pub const LOG_ENV: &str = "SHELF_LOG";

/// Installs the stderr subscriber. `SHELF_LOG` wins over `-v` flags.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
