// ABOUTME: Row types and request structs for the clinical records schema
// ABOUTME: Mirrors the patients/doctors/hospitals/medications/appointments tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A patient record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub birthdate: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Insurance plan reference, if enrolled
    pub plan_id: Option<i64>,
}

/// A doctor record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub discipline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A hospital record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// An appointment row.
///
/// `hospital_id` is a denormalized copy of the doctor's hospital at booking
/// time; the transfer workflow keeps it consistent when a doctor moves.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    pub hospital_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub reason: Option<String>,
    pub cost: f64,
}

/// Lifecycle status of a prescribed medication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum MedicationStatus {
    Ongoing,
    Paused,
    Completed,
}

impl MedicationStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for MedicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MedicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ongoing" => Ok(Self::Ongoing),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown status '{other}', expected Ongoing, Paused, or Completed"
            )),
        }
    }
}

/// Parameters for inserting a medication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMedication {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub name: String,
    pub cost: f64,
    pub status: MedicationStatus,
    pub dosage: String,
    pub frequency: String,
    /// Optional insurance plan covering this prescription
    pub plan_id: Option<i64>,
}

/// Parameters for scheduling an appointment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub hospital_id: i64,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub reason: String,
    pub cost: f64,
}

/// One row of the patient-medication summary view
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PatientMedicationSummary {
    pub patient_id: i64,
    pub patient_name: String,
    pub medication_id: i64,
    pub medication_name: String,
    pub status: MedicationStatus,
    pub cost: f64,
    pub prescribing_doctor: String,
}
