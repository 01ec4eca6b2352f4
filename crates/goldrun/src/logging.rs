// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter for a verbosity count: warnings, or debug from `-vv` up.
pub fn default_filter(verbosity: u8) -> &'static str {
    if verbosity >= 2 {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity count. Calling this twice
/// is harmless; the second subscriber is ignored.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "warn");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(5), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(0);
        init_tracing(2);
    }
}
