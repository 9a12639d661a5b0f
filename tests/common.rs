// ABOUTME: Shared test utilities and seed data for integration tests
// ABOUTME: Provides an in-memory database with a small clinical data set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager
#![allow(dead_code, clippy::unwrap_used)]

use clinic_manager::database::Database;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// Fresh in-memory database with the schema bootstrapped
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:").await.unwrap()
}

/// Seed the scenario used across the tests:
/// - hospitals 2 (General Hospital) and 5 (Lakeside Clinic)
/// - doctor 7 (Dr. Greene) assigned to hospital 2, doctor 8 (Dr. Patel)
///   assigned to hospital 5
/// - patients 1 (Alice Jones, insured) and 2 (Robert Fox)
/// - three appointments for doctor 7 at hospital 2
pub async fn seed_clinic(db: &Database) {
    let pool = db.pool();

    sqlx::query("INSERT INTO insurance_plans (id, name) VALUES (1, 'Basic Care')")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO hospitals (id, name, address, phone) VALUES \
         (2, 'General Hospital', '1 Main St', '555-0100'), \
         (5, 'Lakeside Clinic', '9 Shore Rd', '555-0200')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO doctors (id, name, discipline, email, phone) VALUES \
         (7, 'Dr. Greene', 'Cardiology', 'greene@clinic.test', '555-0101'), \
         (8, 'Dr. Patel', 'Neurology', 'patel@clinic.test', '555-0201')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO doctor_hospitals (doctor_id, hospital_id) VALUES (7, 2), (8, 5)")
        .execute(pool)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO patients (id, name, birthdate, email, phone, address, plan_id) VALUES \
         (1, 'Alice Jones', '1985-02-10', 'alice@example.test', '555-0300', '12 Oak Ave', 1), \
         (2, 'Robert Fox', '1990-07-22', NULL, NULL, NULL, NULL)",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO appointments \
         (patient_id, doctor_id, hospital_id, scheduled_date, scheduled_time, reason, cost) \
         VALUES \
         (1, 7, 2, '2026-04-01', '09:00:00', 'Checkup', 50), \
         (1, 7, 2, '2026-04-01', '10:00:00', 'Follow-up', 40), \
         (1, 7, 2, '2026-04-02', '09:00:00', 'Consultation', 75)",
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn assignment_exists(db: &Database, doctor_id: i64, hospital_id: i64) -> bool {
    sqlx::query("SELECT 1 FROM doctor_hospitals WHERE doctor_id = ? AND hospital_id = ?")
        .bind(doctor_id)
        .bind(hospital_id)
        .fetch_optional(db.pool())
        .await
        .unwrap()
        .is_some()
}

/// Hospital ids of a doctor's appointments, in insertion order
pub async fn appointment_hospitals(db: &Database, doctor_id: i64) -> Vec<i64> {
    sqlx::query_scalar("SELECT hospital_id FROM appointments WHERE doctor_id = ? ORDER BY id")
        .bind(doctor_id)
        .fetch_all(db.pool())
        .await
        .unwrap()
}

pub async fn count_assignments(db: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM doctor_hospitals")
        .fetch_one(db.pool())
        .await
        .unwrap()
}

pub async fn count_appointments(db: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM appointments")
        .fetch_one(db.pool())
        .await
        .unwrap()
}
