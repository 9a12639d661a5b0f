// ABOUTME: Database handle and schema bootstrap for the clinical records client
// ABOUTME: One concern per submodule; all statements are parameter-bound
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! # Data Access
//!
//! `Database` wraps the connection pool and exposes one `impl` block per
//! concern (patients, doctors, hospitals, medications, appointments, and the
//! transactional transfer workflow). The schema is bootstrapped on first
//! connect with idempotent statements.
//!
//! The pool is capped at a single connection: the client is a sequential
//! prompt-read-execute loop with exactly one statement in flight at a time.

mod appointments;
mod checks;
mod doctors;
mod errors;
mod hospitals;
mod medications;
mod patients;
mod transactions;
mod transfer;

pub use appointments::ScheduleError;
pub use errors::{ConstraintKind, DatabaseError, DbResult};
pub use transactions::TransactionGuard;
pub use transfer::{
    TransferDecision, TransferError, TransferOutcome, TransferRequest, TransferSummary,
};

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use tracing::info;

/// Handle to the clinical records database
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Open the database and bootstrap the schema.
    ///
    /// `SQLite` database files are created on demand.
    ///
    /// # Errors
    ///
    /// Returns a [`DatabaseError`] if the connection cannot be established
    /// or the schema bootstrap fails. Both are fatal to the session.
    pub async fn new(database_url: &str) -> DbResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&connection_options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        info!(database_url, "database ready");

        Ok(db)
    }

    /// Get a reference to the pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create the clinical records schema if it does not exist yet.
    pub async fn migrate(&self) -> DbResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS insurance_plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS patients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                birthdate TEXT,
                email TEXT,
                phone TEXT,
                address TEXT,
                plan_id INTEGER REFERENCES insurance_plans (id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS doctors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                discipline TEXT,
                email TEXT,
                phone TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS hospitals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT,
                phone TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS doctor_hospitals (
                doctor_id INTEGER NOT NULL REFERENCES doctors (id),
                hospital_id INTEGER NOT NULL REFERENCES hospitals (id),
                PRIMARY KEY (doctor_id, hospital_id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // scheduled_date/scheduled_time are TEXT in ISO form; the unique
        // constraint rejects double-booking a doctor for one slot.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS appointments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                patient_id INTEGER NOT NULL REFERENCES patients (id),
                doctor_id INTEGER NOT NULL REFERENCES doctors (id),
                hospital_id INTEGER NOT NULL REFERENCES hospitals (id),
                scheduled_date TEXT NOT NULL,
                scheduled_time TEXT NOT NULL,
                reason TEXT,
                cost REAL NOT NULL DEFAULT 0,
                UNIQUE (doctor_id, scheduled_date, scheduled_time)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS medications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                patient_id INTEGER NOT NULL REFERENCES patients (id),
                doctor_id INTEGER NOT NULL REFERENCES doctors (id),
                name TEXT NOT NULL,
                cost REAL NOT NULL CHECK (cost >= 0 AND cost <= 1000),
                status TEXT NOT NULL CHECK (status IN ('Ongoing', 'Paused', 'Completed')),
                dosage TEXT,
                frequency TEXT,
                plan_id INTEGER REFERENCES insurance_plans (id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_appointments_doctor_hospital \
             ON appointments (doctor_id, hospital_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_medications_patient ON medications (patient_id)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE VIEW IF NOT EXISTS patient_medication_summary AS
                SELECT p.id AS patient_id,
                       p.name AS patient_name,
                       m.id AS medication_id,
                       m.name AS medication_name,
                       m.status AS status,
                       m.cost AS cost,
                       d.name AS prescribing_doctor
                FROM medications m
                JOIN patients p ON p.id = m.patient_id
                JOIN doctors d ON d.id = m.doctor_id
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
