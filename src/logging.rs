//! Logging setup for hosts without their own `log` backend.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the `env_logger` backend behind the `log` facade.
///
/// Level filtering follows the standard `RUST_LOG` environment variable and
/// defaults to warnings. Safe to call more than once.
pub fn initialize() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format_timestamp(None)
            .init();
    });
}
