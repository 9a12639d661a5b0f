// ABOUTME: clinic-cli - interactive console client for the clinical records database
// ABOUTME: Loads configuration, opens the database, and runs the menu loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager
//!
//! Usage:
//! ```bash
//! # Run against the default local database
//! clinic-cli
//!
//! # Point at another database file
//! clinic-cli --database-url sqlite:/var/lib/clinic/records.db
//!
//! # Enable debug logging
//! clinic-cli -v
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::info;

use clinic_manager::cli::Prompter;
use clinic_manager::config::{ClinicConfig, LogLevel};
use clinic_manager::database::Database;
use clinic_manager::{cli, logging};

#[derive(Parser)]
#[command(
    name = "clinic-cli",
    about = "Clinical records console client",
    long_about = "Menu-driven console client for browsing and maintaining \
                  a clinical records database."
)]
struct Cli {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let mut config = ClinicConfig::from_env();
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }
    if args.verbose {
        config.log_level = LogLevel::Debug;
    }

    logging::init(config.log_level);
    info!(database_url = %config.database_url, "starting clinic-cli");

    let db = Database::new(&config.database_url)
        .await
        .context("failed to open the clinical records database")?;

    let mut prompter = Prompter::stdio();
    prompter.say(&format!("Connected to {}.", config.database_url))?;

    cli::run(&db, &mut prompter).await
}
