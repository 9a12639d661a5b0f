// ABOUTME: Patient data access
// ABOUTME: Listing plus single-statement contact update and delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

use super::errors::DbResult;
use super::Database;
use crate::models::Patient;

impl Database {
    /// List all patients ordered by id.
    pub async fn list_patients(&self) -> DbResult<Vec<Patient>> {
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT id, name, birthdate, email, phone, address, plan_id \
             FROM patients ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(patients)
    }

    /// Update a patient's address and phone number.
    ///
    /// Returns the affected-row count; 0 means no patient with that id.
    pub async fn update_patient_contact(
        &self,
        patient_id: i64,
        address: &str,
        phone: &str,
    ) -> DbResult<u64> {
        let result = sqlx::query("UPDATE patients SET address = ?, phone = ? WHERE id = ?")
            .bind(address)
            .bind(phone)
            .bind(patient_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a patient.
    ///
    /// Returns the affected-row count; a patient referenced by medications
    /// or appointments surfaces as a foreign-key constraint violation.
    pub async fn delete_patient(&self, patient_id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(patient_id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
