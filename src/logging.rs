//! Logging setup using `tracing_subscriber`.
//!
//! Diagnostics go to stderr so they never mix with printed results. The filter
//! comes from `TFUN_LOG` (standard `EnvFilter` directives); without it the
//! level is `warn`, or `debug` for this crate when `verbose` is set.

use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

static TFUN_LOG_ENV_VAR: &str = "TFUN_LOG";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = env_filter(verbose);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .with_target(false)
            .init();
    });
}

fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    match std::env::var(TFUN_LOG_ENV_VAR) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::builder()
            .with_default_directive(default_level.into())
            .parse_lossy(directives),
        _ if verbose => EnvFilter::new(format!("warn,table_fun={default_level}")),
        _ => EnvFilter::new(default_level.to_string()),
    }
}
