// ABOUTME: Library entry point for the clinic-manager console client
// ABOUTME: Exposes configuration, data access, and the interactive menu loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

#![deny(unsafe_code)]

//! # Clinic Manager
//!
//! A menu-driven console client for a clinical records database covering
//! patients, doctors, hospitals, medications, and appointments.
//!
//! The client demonstrates the standard access patterns against that schema:
//! plain selects, parameter-bound inserts/updates/deletes, a validated
//! appointment-scheduling operation, and a multi-statement doctor-transfer
//! workflow executed under a single all-or-nothing transaction.
//!
//! ## Architecture
//!
//! - **Config**: environment-based configuration with CLI overrides
//! - **Database**: typed data access over `SQLite`, one concern per module
//! - **CLI**: the numbered menu loop and line-based prompt helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic_manager::config::ClinicConfig;
//! use clinic_manager::database::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClinicConfig::from_env();
//!     let db = Database::new(&config.database_url).await?;
//!     let mut prompter = clinic_manager::cli::Prompter::stdio();
//!     clinic_manager::cli::run(&db, &mut prompter).await
//! }
//! ```

/// Interactive menu loop and prompt helpers
pub mod cli;

/// Environment-based configuration
pub mod config;

/// Typed data access over the clinical records schema
pub mod database;

/// Logging configuration and setup
pub mod logging;

/// Row types and request structs shared across the crate
pub mod models;
