// ABOUTME: Medication data access
// ABOUTME: Parameter-bound insert and the patient-medication summary view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

use super::errors::DbResult;
use super::Database;
use crate::models::{NewMedication, PatientMedicationSummary};

impl Database {
    /// Insert a medication record.
    ///
    /// Returns the affected-row count. Unknown patient/doctor ids, a cost
    /// outside the schema's range, or an invalid status surface as
    /// classified constraint violations.
    pub async fn insert_medication(&self, medication: &NewMedication) -> DbResult<u64> {
        let result = sqlx::query(
            "INSERT INTO medications \
             (patient_id, doctor_id, name, cost, status, dosage, frequency, plan_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(medication.patient_id)
        .bind(medication.doctor_id)
        .bind(medication.name.as_str())
        .bind(medication.cost)
        .bind(medication.status)
        .bind(medication.dosage.as_str())
        .bind(medication.frequency.as_str())
        .bind(medication.plan_id)
        .execute(self.pool())
        .await?;
        Ok(result.rows_affected())
    }

    /// Read the patient-medication summary view.
    pub async fn patient_medication_summary(&self) -> DbResult<Vec<PatientMedicationSummary>> {
        let rows = sqlx::query_as::<_, PatientMedicationSummary>(
            "SELECT patient_id, patient_name, medication_id, medication_name, \
                    status, cost, prescribing_doctor \
             FROM patient_medication_summary ORDER BY patient_id, medication_id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}
