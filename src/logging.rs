use color_eyre::eyre::eyre;
use color_eyre::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive. Takes precedence
/// over the configured level.
pub const LOG_ENV: &str = "DATAGRID_LOG";

/// Pick the filter directive: `DATAGRID_LOG` if set, else `debug` when
/// `debug` is requested, else the configured level.
pub fn filter_directive(configured: &str, debug: bool, env: Option<String>) -> String {
    match env {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if debug => "debug".to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global fmt subscriber, writing to stderr so table and JSON
/// output on stdout stay clean.
pub fn init_logging(configured: &str, debug: bool) -> Result<()> {
    let directive = filter_directive(configured, debug, std::env::var(LOG_ENV).ok());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| eyre!("Invalid log filter '{}': {}", directive, e))?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {}", e))
}
