// ABOUTME: Numbered menu loop dispatching one data-access action per iteration
// ABOUTME: Converts classified errors into operator diagnostics; only fatal ones exit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! The loop reads one selection, runs the matching action to completion, and
//! prints the result. Precondition failures and constraint violations are
//! reported and the loop continues; connectivity failures end the session.

pub mod prompts;

pub use prompts::Prompter;

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::error;

use crate::database::{
    Database, DatabaseError, ScheduleError, TransferDecision, TransferError, TransferOutcome,
    TransferRequest,
};
use crate::models::{NewAppointment, NewMedication, Patient};

#[derive(Debug, Error)]
enum MenuError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Run the menu loop until the operator exits or a fatal error occurs.
///
/// # Errors
///
/// Returns an error only for conditions that end the session: a closed
/// input stream or a connectivity failure.
pub async fn run<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    loop {
        print_menu(prompter)?;
        let choice = prompter.read_i64("Choose an option: ")?;

        let result = match choice {
            0 => {
                prompter.say("Exiting.")?;
                return Ok(());
            }
            1 => view_patients(db, prompter).await,
            2 => view_doctors(db, prompter).await,
            3 => view_hospitals(db, prompter).await,
            4 => view_medication_summary(db, prompter).await,
            5 => insert_medication(db, prompter).await,
            6 => update_patient(db, prompter).await,
            7 => delete_patient(db, prompter).await,
            8 => schedule_appointment(db, prompter).await,
            9 => transfer_doctor(db, prompter).await,
            _ => {
                prompter.say("Invalid choice, try again.")?;
                Ok(())
            }
        };

        match result {
            Ok(()) => {}
            Err(MenuError::Io(err)) => return Err(err.into()),
            Err(MenuError::Database(err)) if err.is_fatal() => {
                error!(error = %err, "fatal database error; ending session");
                return Err(err.into());
            }
            Err(MenuError::Database(err)) => {
                prompter.say(&format!("Operation failed: {err}"))?;
            }
        }
    }
}

fn print_menu<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<()> {
    prompter.say("")?;
    prompter.say("==== Clinical Records ====")?;
    prompter.say("1. View patients")?;
    prompter.say("2. View doctors")?;
    prompter.say("3. View hospitals")?;
    prompter.say("4. View patient medications")?;
    prompter.say("5. Insert medication")?;
    prompter.say("6. Update patient contact details")?;
    prompter.say("7. Delete patient")?;
    prompter.say("8. Schedule appointment")?;
    prompter.say("9. Transfer doctor to a new hospital (transaction)")?;
    prompter.say("0. Exit")
}

async fn view_patients<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    let patients = db.list_patients().await?;
    prompter.say("")?;
    prompter.say("--- Patients ---")?;
    if patients.is_empty() {
        prompter.say("(no patients)")?;
    }
    for patient in &patients {
        prompter.say(&render_patient(patient))?;
    }
    Ok(())
}

fn render_patient(patient: &Patient) -> String {
    format!(
        "id: {} | name: {} | born: {} | email: {} | phone: {} | address: {} | plan: {}",
        patient.id,
        patient.name,
        patient
            .birthdate
            .map_or_else(|| "-".to_owned(), |d| d.to_string()),
        opt(&patient.email),
        opt(&patient.phone),
        opt(&patient.address),
        patient
            .plan_id
            .map_or_else(|| "-".to_owned(), |p| p.to_string()),
    )
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

async fn view_doctors<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    let doctors = db.list_doctors().await?;
    prompter.say("")?;
    prompter.say("--- Doctors ---")?;
    if doctors.is_empty() {
        prompter.say("(no doctors)")?;
    }
    for doctor in &doctors {
        prompter.say(&format!(
            "id: {} | name: {} | discipline: {} | email: {} | phone: {}",
            doctor.id,
            doctor.name,
            opt(&doctor.discipline),
            opt(&doctor.email),
            opt(&doctor.phone),
        ))?;
    }
    Ok(())
}

async fn view_hospitals<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    let hospitals = db.list_hospitals().await?;
    prompter.say("")?;
    prompter.say("--- Hospitals ---")?;
    if hospitals.is_empty() {
        prompter.say("(no hospitals)")?;
    }
    for hospital in &hospitals {
        prompter.say(&format!(
            "id: {} | name: {} | address: {} | phone: {}",
            hospital.id,
            hospital.name,
            opt(&hospital.address),
            opt(&hospital.phone),
        ))?;
    }
    Ok(())
}

async fn view_medication_summary<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    let rows = db.patient_medication_summary().await?;
    prompter.say("")?;
    prompter.say("--- Patient medications ---")?;
    if rows.is_empty() {
        prompter.say("(no medications)")?;
    }
    for row in &rows {
        prompter.say(&format!(
            "patient #{} ({}) | medication #{} ({}) | status: {} | cost: {:.2} | doctor: {}",
            row.patient_id,
            row.patient_name,
            row.medication_id,
            row.medication_name,
            row.status,
            row.cost,
            row.prescribing_doctor,
        ))?;
    }
    Ok(())
}

async fn insert_medication<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    prompter.say("")?;
    prompter.say("--- Insert medication ---")?;
    let medication = NewMedication {
        patient_id: prompter.read_i64("Patient id: ")?,
        doctor_id: prompter.read_i64("Doctor id: ")?,
        name: prompter.read_non_empty("Medication name: ")?,
        cost: prompter.read_non_negative_f64("Cost (0 - 1000): ")?,
        status: prompter.read_status("Status (Ongoing/Paused/Completed): ")?,
        dosage: prompter.read_non_empty("Dosage (e.g. '10mg'): ")?,
        frequency: prompter.read_non_empty("Frequency (e.g. 'Once daily'): ")?,
        plan_id: prompter.read_optional_i64("Plan id (optional, press Enter for none): ")?,
    };

    match db.insert_medication(&medication).await {
        Ok(rows) => prompter.say(&format!("Inserted {rows} medication record(s)."))?,
        Err(err) if err.is_constraint_violation() => {
            prompter.say(&format!("Error inserting medication: {err}"))?;
            prompter.say("Check the patient/doctor ids, the cost range, and the status value.")?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

async fn update_patient<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    prompter.say("")?;
    prompter.say("--- Update patient contact details ---")?;
    let patient_id = prompter.read_i64("Patient id to update: ")?;
    let address = prompter.read_non_empty("New address: ")?;
    let phone = prompter.read_non_empty("New phone: ")?;

    let rows = db
        .update_patient_contact(patient_id, &address, &phone)
        .await?;
    if rows == 0 {
        prompter.say("No patient found with that id.")?;
    } else {
        prompter.say(&format!("Updated {rows} patient(s)."))?;
    }
    Ok(())
}

async fn delete_patient<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    prompter.say("")?;
    prompter.say("--- Delete patient ---")?;
    let patient_id = prompter.read_i64("Patient id to delete: ")?;

    match db.delete_patient(patient_id).await {
        Ok(0) => prompter.say("No patient found with that id.")?,
        Ok(rows) => prompter.say(&format!("Deleted {rows} patient(s)."))?,
        Err(err) if err.is_constraint_violation() => {
            prompter.say(&format!("Error deleting patient: {err}"))?;
            prompter.say(
                "Cannot delete: this patient is referenced by other records \
                 (medications or appointments).",
            )?;
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

async fn schedule_appointment<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    prompter.say("")?;
    prompter.say("--- Schedule appointment ---")?;
    let appointment = NewAppointment {
        patient_id: prompter.read_i64("Patient id: ")?,
        doctor_id: prompter.read_i64("Doctor id: ")?,
        hospital_id: prompter.read_i64("Hospital id: ")?,
        scheduled_date: prompter.read_date("Date (YYYY-MM-DD): ")?,
        scheduled_time: prompter.read_time("Time (HH:MM:SS): ")?,
        reason: prompter.read_non_empty("Visit reason: ")?,
        cost: prompter.read_non_negative_f64("Cost: ")?,
    };

    match db.schedule_appointment(&appointment).await {
        Ok(id) => prompter.say(&format!("Appointment {id} scheduled successfully."))?,
        Err(ScheduleError::PatientNotFound(id)) => {
            prompter.say(&format!("No patient found with id {id}."))?;
        }
        Err(ScheduleError::DoctorNotFound(id)) => {
            prompter.say(&format!("No doctor found with id {id}."))?;
        }
        Err(ScheduleError::HospitalNotFound(id)) => {
            prompter.say(&format!("No hospital found with id {id}."))?;
        }
        Err(ScheduleError::Database(err)) if err.is_constraint_violation() => {
            prompter.say(&format!("Error scheduling appointment: {err}"))?;
            prompter.say("Constraint violation (for example a double-booked doctor).")?;
        }
        Err(ScheduleError::Database(err)) => return Err(err.into()),
    }
    Ok(())
}

async fn transfer_doctor<R: BufRead, W: Write>(
    db: &Database,
    prompter: &mut Prompter<R, W>,
) -> Result<(), MenuError> {
    prompter.say("")?;
    prompter.say("--- Transaction: transfer doctor to a new hospital ---")?;
    let request = TransferRequest {
        doctor_id: prompter.read_i64("Doctor id to transfer: ")?,
        current_hospital_id: prompter.read_i64("Current hospital id: ")?,
        new_hospital_id: prompter.read_i64("New hospital id: ")?,
    };

    // The decision callback runs at the commit point; a prompt failure there
    // falls back to rollback and is surfaced after the workflow returns.
    let mut prompt_failure: Option<io::Error> = None;
    let outcome = db
        .transfer_doctor(request, |summary| {
            let decision = (|| -> io::Result<TransferDecision> {
                prompter.say(&format!(
                    "Updated assignment rows: {}",
                    summary.assignments_updated
                ))?;
                prompter.say(&format!(
                    "Updated appointment rows: {}",
                    summary.appointments_updated
                ))?;
                let simulate =
                    prompter.read_i64("Simulate failure and roll back? (1 = yes, 0 = no): ")?;
                Ok(if simulate == 1 {
                    TransferDecision::Rollback
                } else {
                    TransferDecision::Commit
                })
            })();
            decision.unwrap_or_else(|err| {
                prompt_failure = Some(err);
                TransferDecision::Rollback
            })
        })
        .await;

    if let Some(err) = prompt_failure {
        return Err(err.into());
    }

    match outcome {
        Ok(TransferOutcome::Committed(_)) => {
            prompter.say("Doctor transfer committed successfully.")?;
        }
        Ok(TransferOutcome::RolledBack(_)) => {
            prompter.say("Simulated failure: transaction rolled back, no changes kept.")?;
        }
        Err(TransferError::DoctorNotFound(id)) => {
            prompter.say(&format!("No doctor found with id {id}. Rolled back."))?;
        }
        Err(TransferError::HospitalNotFound(id)) => {
            prompter.say(&format!("No hospital found with id {id}. Rolled back."))?;
        }
        Err(TransferError::AssignmentNotFound {
            doctor_id,
            hospital_id,
        }) => {
            prompter.say(&format!(
                "Doctor {doctor_id} is not currently assigned to hospital {hospital_id}. \
                 Rolled back."
            ))?;
        }
        Err(TransferError::Database(err)) if !err.is_fatal() => {
            prompter.say(&format!("Transfer failed: {err}. Rolled back."))?;
        }
        Err(TransferError::Database(err)) => return Err(err.into()),
    }
    Ok(())
}
