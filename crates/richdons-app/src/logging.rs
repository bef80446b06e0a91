//! Tracing initialization

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels,
/// e.g. `RICHDONS_LOG=richdons_app=debug,richdons_infra=info`
pub const LOG_ENV: &str = "RICHDONS_LOG";

/// Install the stderr subscriber.
///
/// `RICHDONS_LOG` wins when set and valid; otherwise `verbose` selects debug
/// output for the workspace crates and the default is warnings only.
/// Calling it more than once has no effect.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fallback = if verbose {
            "richdons_app=debug,richdons_infra=debug,richdons_budget=debug"
        } else {
            "warn"
        };
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
