//! Logging setup

use nsjoin_core::{Error, Result};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding a full filter directive, overriding the flags
pub const LOG_ENV: &str = "NSJOIN_LOG";

/// Install the global subscriber, writing to stderr
pub fn init(verbose: bool, level: &str) -> Result<()> {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), verbose, level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn build_filter(directives: Option<&str>, verbose: bool, level: &str) -> Result<EnvFilter> {
    if let Some(directives) = directives {
        return EnvFilter::try_new(directives).map_err(|e| Error::InvalidConfig {
            message: format!("Invalid {LOG_ENV} value '{directives}': {e}"),
        });
    }

    let level = if verbose {
        Level::DEBUG
    } else {
        level.parse::<Level>().map_err(|_| Error::InvalidConfig {
            message: format!(
                "Invalid log level '{level}' (expected trace, debug, info, warn or error)"
            ),
        })?
    };

    Ok(EnvFilter::default().add_directive(LevelFilter::from_level(level).into()))
}
