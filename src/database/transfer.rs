// ABOUTME: Transactional doctor-transfer workflow with commit/rollback policy
// ABOUTME: Moves an assignment and retags dependent appointments atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! Moving a doctor from one hospital to another touches two tables: the
//! assignment row in `doctor_hospitals` and every appointment row still
//! tagged with the old hospital. Both updates run inside one transaction;
//! either all of them commit or none do.
//!
//! Preconditions are checked in order inside the same transaction, each
//! aborting with a typed error and a rollback:
//! 1. the doctor exists
//! 2. the current hospital exists
//! 3. the new hospital exists
//! 4. an assignment row exists for (doctor, current hospital)
//!
//! After the updates, the caller-supplied decision callback sees the
//! affected-row counts and picks commit or rollback. The rollback branch is
//! the operator-facing demonstration hook; it carries no business rule.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use super::checks;
use super::errors::{DatabaseError, DbResult};
use super::transactions::{rollback_logged, TransactionGuard};
use super::Database;

/// Inputs to the transfer workflow
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransferRequest {
    pub doctor_id: i64,
    pub current_hospital_id: i64,
    pub new_hospital_id: i64,
}

/// Affected-row counts observed inside the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferSummary {
    /// Assignment rows repointed in `doctor_hospitals` (1 on the happy path)
    pub assignments_updated: u64,
    /// Appointment rows retagged to the new hospital
    pub appointments_updated: u64,
}

/// Operator choice at the commit point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDecision {
    Commit,
    Rollback,
}

/// How the workflow ended when no error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Both updates are durable
    Committed(TransferSummary),
    /// The operator chose rollback; nothing changed
    RolledBack(TransferSummary),
}

/// Why a transfer was aborted
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("no doctor found with id {0}")]
    DoctorNotFound(i64),

    #[error("no hospital found with id {0}")]
    HospitalNotFound(i64),

    #[error("doctor {doctor_id} is not assigned to hospital {hospital_id}")]
    AssignmentNotFound { doctor_id: i64, hospital_id: i64 },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl Database {
    /// Transfer a doctor to a new hospital as a single atomic unit.
    ///
    /// `decide` runs at the commit point with the affected-row counts and
    /// chooses [`TransferDecision::Commit`] or [`TransferDecision::Rollback`].
    ///
    /// # Errors
    ///
    /// A failed precondition or database error rolls back and returns a
    /// [`TransferError`]; no mutation survives. A rollback failure is logged
    /// separately and never masks the original error. On every exit path the
    /// transaction scope is closed before this function returns, so the
    /// connection is back in its default auto-commit mode.
    pub async fn transfer_doctor<F>(
        &self,
        request: TransferRequest,
        decide: F,
    ) -> Result<TransferOutcome, TransferError>
    where
        F: FnOnce(&TransferSummary) -> TransferDecision,
    {
        let mut guard = TransactionGuard::begin(self.pool())
            .await
            .map_err(TransferError::Database)?;

        if !checks::doctor_exists(guard.executor()?, request.doctor_id).await? {
            rollback_logged(guard).await;
            return Err(TransferError::DoctorNotFound(request.doctor_id));
        }
        if !checks::hospital_exists(guard.executor()?, request.current_hospital_id).await? {
            rollback_logged(guard).await;
            return Err(TransferError::HospitalNotFound(request.current_hospital_id));
        }
        if !checks::hospital_exists(guard.executor()?, request.new_hospital_id).await? {
            rollback_logged(guard).await;
            return Err(TransferError::HospitalNotFound(request.new_hospital_id));
        }
        if !checks::assignment_exists(
            guard.executor()?,
            request.doctor_id,
            request.current_hospital_id,
        )
        .await?
        {
            rollback_logged(guard).await;
            return Err(TransferError::AssignmentNotFound {
                doctor_id: request.doctor_id,
                hospital_id: request.current_hospital_id,
            });
        }

        let summary = match apply_updates(&mut guard, request).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(error = %err, "transfer update failed; rolling back");
                rollback_logged(guard).await;
                return Err(TransferError::Database(err));
            }
        };

        match decide(&summary) {
            TransferDecision::Commit => {
                guard.commit().await.map_err(TransferError::Database)?;
                info!(
                    doctor_id = request.doctor_id,
                    from = request.current_hospital_id,
                    to = request.new_hospital_id,
                    appointments = summary.appointments_updated,
                    "doctor transfer committed"
                );
                Ok(TransferOutcome::Committed(summary))
            }
            TransferDecision::Rollback => {
                guard.rollback().await.map_err(TransferError::Database)?;
                info!(
                    doctor_id = request.doctor_id,
                    "doctor transfer rolled back at operator request"
                );
                Ok(TransferOutcome::RolledBack(summary))
            }
        }
    }
}

async fn apply_updates(
    guard: &mut TransactionGuard,
    request: TransferRequest,
) -> DbResult<TransferSummary> {
    let assignments = sqlx::query(
        "UPDATE doctor_hospitals SET hospital_id = ? WHERE doctor_id = ? AND hospital_id = ?",
    )
    .bind(request.new_hospital_id)
    .bind(request.doctor_id)
    .bind(request.current_hospital_id)
    .execute(guard.executor()?)
    .await?;

    let appointments = sqlx::query(
        "UPDATE appointments SET hospital_id = ? WHERE doctor_id = ? AND hospital_id = ?",
    )
    .bind(request.new_hospital_id)
    .bind(request.doctor_id)
    .bind(request.current_hospital_id)
    .execute(guard.executor()?)
    .await?;

    Ok(TransferSummary {
        assignments_updated: assignments.rows_affected(),
        appointments_updated: appointments.rows_affected(),
    })
}
