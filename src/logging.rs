// ABOUTME: Logging setup for the console client
// ABOUTME: Sends structured diagnostics to stderr, keeping stdout for menu output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! Diagnostics go to stderr as structured `tracing` events so the menu's
//! stdout output stays clean. `RUST_LOG` overrides the configured level.

use crate::config::LogLevel;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Calling this more than once is a no-op; the first subscriber wins.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
