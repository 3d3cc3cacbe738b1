//! Logger initialization for binaries built on the library.
//!
//! The library itself only talks to the `log` facade; nothing is printed until a binary calls
//! [init_logging].

use std::sync::Once;

#[derive(Debug, Clone)]
/// Logger configuration.
pub struct LoggingConfig {
    /// Filter in `env_logger` syntax, e.g. `"info"` or `"mvp::matrix=debug"`. When unset,
    /// `RUST_LOG` is used, then `info`.
    pub env_filter: Option<String>,
    /// ANSI coloring behavior.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed, e.g. by a test harness.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("Logging initialized");
    });
}
