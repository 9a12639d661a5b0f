// ABOUTME: Row-existence queries used as workflow preconditions
// ABOUTME: Read-only, run on the workflow's own transaction connection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

use sqlx::SqliteConnection;

use super::errors::DbResult;

pub(crate) async fn patient_exists(conn: &mut SqliteConnection, patient_id: i64) -> DbResult<bool> {
    let row = sqlx::query("SELECT 1 FROM patients WHERE id = ?")
        .bind(patient_id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

pub(crate) async fn doctor_exists(conn: &mut SqliteConnection, doctor_id: i64) -> DbResult<bool> {
    let row = sqlx::query("SELECT 1 FROM doctors WHERE id = ?")
        .bind(doctor_id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

pub(crate) async fn hospital_exists(
    conn: &mut SqliteConnection,
    hospital_id: i64,
) -> DbResult<bool> {
    let row = sqlx::query("SELECT 1 FROM hospitals WHERE id = ?")
        .bind(hospital_id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

pub(crate) async fn assignment_exists(
    conn: &mut SqliteConnection,
    doctor_id: i64,
    hospital_id: i64,
) -> DbResult<bool> {
    let row = sqlx::query("SELECT 1 FROM doctor_hospitals WHERE doctor_id = ? AND hospital_id = ?")
        .bind(doctor_id)
        .bind(hospital_id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}
