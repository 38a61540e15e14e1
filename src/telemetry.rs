//! Logging setup.
//!
//! Log events go to stderr so they never interleave with the interactive
//! prompts on stdout. The filter comes from `CRX_SCAFFOLD_LOG` and falls back
//! to `warn`, which keeps a normal run silent.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "CRX_SCAFFOLD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Initialize the tracing subscriber. Safe to call more than once.
pub fn init_telemetry() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .ok();
}
