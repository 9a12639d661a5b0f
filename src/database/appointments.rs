// ABOUTME: Appointment scheduling as a validated transactional insert
// ABOUTME: Checks patient, doctor, and hospital existence before inserting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! Scheduling validates the referenced patient, doctor, and hospital and
//! inserts the appointment inside one transaction, so a half-validated
//! appointment can never land.

use thiserror::Error;
use tracing::{info, warn};

use super::checks;
use super::errors::{DatabaseError, DbResult};
use super::transactions::{rollback_logged, TransactionGuard};
use super::Database;
use crate::models::NewAppointment;

/// Why an appointment could not be scheduled
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("no patient found with id {0}")]
    PatientNotFound(i64),

    #[error("no doctor found with id {0}")]
    DoctorNotFound(i64),

    #[error("no hospital found with id {0}")]
    HospitalNotFound(i64),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl Database {
    /// Schedule an appointment, returning its new id.
    ///
    /// # Errors
    ///
    /// Returns a typed not-found error when the patient, doctor, or hospital
    /// does not exist; a double-booked doctor surfaces as a classified
    /// unique-constraint violation. Nothing is inserted on any error path.
    pub async fn schedule_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<i64, ScheduleError> {
        let mut guard = TransactionGuard::begin(self.pool()).await?;

        if !checks::patient_exists(guard.executor()?, appointment.patient_id).await? {
            rollback_logged(guard).await;
            return Err(ScheduleError::PatientNotFound(appointment.patient_id));
        }
        if !checks::doctor_exists(guard.executor()?, appointment.doctor_id).await? {
            rollback_logged(guard).await;
            return Err(ScheduleError::DoctorNotFound(appointment.doctor_id));
        }
        if !checks::hospital_exists(guard.executor()?, appointment.hospital_id).await? {
            rollback_logged(guard).await;
            return Err(ScheduleError::HospitalNotFound(appointment.hospital_id));
        }

        let inserted = insert_appointment(&mut guard, appointment).await;
        match inserted {
            Ok(appointment_id) => {
                guard.commit().await?;
                info!(
                    appointment_id,
                    doctor_id = appointment.doctor_id,
                    patient_id = appointment.patient_id,
                    "appointment scheduled"
                );
                Ok(appointment_id)
            }
            Err(err) => {
                warn!(error = %err, "appointment insert failed; rolling back");
                rollback_logged(guard).await;
                Err(ScheduleError::Database(err))
            }
        }
    }
}

async fn insert_appointment(
    guard: &mut TransactionGuard,
    appointment: &NewAppointment,
) -> DbResult<i64> {
    let result = sqlx::query(
        "INSERT INTO appointments \
         (patient_id, doctor_id, hospital_id, scheduled_date, scheduled_time, reason, cost) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(appointment.patient_id)
    .bind(appointment.doctor_id)
    .bind(appointment.hospital_id)
    .bind(appointment.scheduled_date)
    .bind(appointment.scheduled_time)
    .bind(appointment.reason.as_str())
    .bind(appointment.cost)
    .execute(guard.executor()?)
    .await?;
    Ok(result.last_insert_rowid())
}
