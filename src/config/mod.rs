// ABOUTME: Environment-based configuration for the console client
// ABOUTME: Resolves database URL and log level with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! Configuration is read from the environment; the binary may override
//! individual fields from CLI flags after loading.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the database URL.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable holding the default log level.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Database used when no URL is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:clinic.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to the default level
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Runtime configuration for one client session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicConfig {
    /// Database connection URL
    pub database_url: String,
    /// Default log level, overridable via `RUST_LOG`
    pub log_level: LogLevel,
}

impl ClinicConfig {
    /// Load configuration from the environment.
    ///
    /// Every field has a default, so loading never fails; a missing
    /// `DATABASE_URL` falls back to a local `SQLite` file.
    #[must_use]
    pub fn from_env() -> Self {
        let database_url =
            env::var(ENV_DATABASE_URL).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        let log_level = env::var(ENV_LOG_LEVEL)
            .map(|value| LogLevel::from_str_or_default(&value))
            .unwrap_or_default();

        Self {
            database_url,
            log_level,
        }
    }
}
