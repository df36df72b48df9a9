//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{DEFAULT_LOG_FILTER, LOG_ENV};

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr so stdout carries only
/// the report.
///
/// Reads `UNDIGRAPH_LOG` (e.g. `UNDIGRAPH_LOG=undigraph_core=debug`) and
/// falls back to `undigraph=info`. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
