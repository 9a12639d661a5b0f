// ABOUTME: Tests for the single-statement data-access operations
// ABOUTME: Covers selects, the summary view, mutations, and error classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager
#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use chrono::{NaiveDate, NaiveTime};
use clinic_manager::database::{ConstraintKind, Database, DatabaseError, ScheduleError};
use clinic_manager::models::{Appointment, MedicationStatus, NewAppointment, NewMedication};

fn medication_for(patient_id: i64, doctor_id: i64) -> NewMedication {
    NewMedication {
        patient_id,
        doctor_id,
        name: "Lisinopril".to_owned(),
        cost: 12.5,
        status: MedicationStatus::Ongoing,
        dosage: "10mg".to_owned(),
        frequency: "Once daily".to_owned(),
        plan_id: Some(1),
    }
}

fn appointment_for(patient_id: i64, doctor_id: i64, hospital_id: i64) -> NewAppointment {
    NewAppointment {
        patient_id,
        doctor_id,
        hospital_id,
        scheduled_date: NaiveDate::from_ymd_opt(2026, 5, 20).unwrap(),
        scheduled_time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        reason: "Initial consultation".to_owned(),
        cost: 80.0,
    }
}

#[tokio::test]
async fn listing_returns_seeded_rows() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    let patients = db.list_patients().await.unwrap();
    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].name, "Alice Jones");
    assert_eq!(
        patients[0].birthdate,
        Some(NaiveDate::from_ymd_opt(1985, 2, 10).unwrap())
    );
    assert_eq!(patients[1].plan_id, None);

    let doctors = db.list_doctors().await.unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].discipline.as_deref(), Some("Cardiology"));

    let hospitals = db.list_hospitals().await.unwrap();
    assert_eq!(hospitals.len(), 2);
    assert_eq!(hospitals[1].name, "Lakeside Clinic");
}

#[tokio::test]
async fn inserted_medication_appears_in_the_summary_view() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    let rows = db.insert_medication(&medication_for(1, 7)).await.unwrap();
    assert_eq!(rows, 1);

    let summary = db.patient_medication_summary().await.unwrap();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].patient_name, "Alice Jones");
    assert_eq!(summary[0].medication_name, "Lisinopril");
    assert_eq!(summary[0].status, MedicationStatus::Ongoing);
    assert_eq!(summary[0].prescribing_doctor, "Dr. Greene");
}

#[tokio::test]
async fn medication_for_unknown_patient_is_a_foreign_key_violation() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    let err = db
        .insert_medication(&medication_for(999, 7))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DatabaseError::ConstraintViolation {
            kind: ConstraintKind::ForeignKey,
            ..
        }
    ));
    assert!(db.patient_medication_summary().await.unwrap().is_empty());
}

#[tokio::test]
async fn medication_cost_out_of_range_is_a_check_violation() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    let mut medication = medication_for(1, 7);
    medication.cost = 1500.0;
    let err = db.insert_medication(&medication).await.unwrap_err();

    assert!(matches!(
        err,
        DatabaseError::ConstraintViolation {
            kind: ConstraintKind::Check,
            ..
        }
    ));
}

#[tokio::test]
async fn update_patient_contact_reports_affected_rows() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    let rows = db
        .update_patient_contact(999, "Nowhere", "000")
        .await
        .unwrap();
    assert_eq!(rows, 0);

    let rows = db
        .update_patient_contact(2, "4 Elm Ct", "555-0400")
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let patients = db.list_patients().await.unwrap();
    assert_eq!(patients[1].address.as_deref(), Some("4 Elm Ct"));
    assert_eq!(patients[1].phone.as_deref(), Some("555-0400"));
}

#[tokio::test]
async fn deleting_a_referenced_patient_is_a_constraint_violation() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    // Patient 1 is referenced by the seeded appointments
    let err = db.delete_patient(1).await.unwrap_err();
    assert!(err.is_constraint_violation());
    assert_eq!(db.list_patients().await.unwrap().len(), 2);
}

#[tokio::test]
async fn deleting_an_unreferenced_patient_succeeds() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    let rows = db.delete_patient(2).await.unwrap();
    assert_eq!(rows, 1);
    let patients = db.list_patients().await.unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].id, 1);
}

#[tokio::test]
async fn scheduling_inserts_one_appointment() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;
    let before = common::count_appointments(&db).await;

    let id = db
        .schedule_appointment(&appointment_for(1, 8, 5))
        .await
        .unwrap();

    assert!(id > 0);
    assert_eq!(common::count_appointments(&db).await, before + 1);

    let stored = sqlx::query_as::<_, Appointment>(
        "SELECT id, patient_id, doctor_id, hospital_id, scheduled_date, scheduled_time, \
                reason, cost \
         FROM appointments WHERE id = ?",
    )
    .bind(id)
    .fetch_one(db.pool())
    .await
    .unwrap();
    assert_eq!(stored.hospital_id, 5);
    assert_eq!(
        stored.scheduled_date,
        NaiveDate::from_ymd_opt(2026, 5, 20).unwrap()
    );
    assert_eq!(
        stored.scheduled_time,
        NaiveTime::from_hms_opt(14, 30, 0).unwrap()
    );
    assert_eq!(stored.reason.as_deref(), Some("Initial consultation"));
}

#[tokio::test]
async fn scheduling_against_missing_rows_inserts_nothing() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;
    let before = common::count_appointments(&db).await;

    let err = db
        .schedule_appointment(&appointment_for(999, 8, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::PatientNotFound(999)));

    let err = db
        .schedule_appointment(&appointment_for(1, 999, 5))
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::DoctorNotFound(999)));

    let err = db
        .schedule_appointment(&appointment_for(1, 8, 999))
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::HospitalNotFound(999)));

    assert_eq!(common::count_appointments(&db).await, before);
}

#[tokio::test]
async fn double_booking_a_doctor_is_a_unique_violation() {
    let db = common::create_test_database().await;
    common::seed_clinic(&db).await;

    db.schedule_appointment(&appointment_for(1, 8, 5))
        .await
        .unwrap();

    // Same doctor, same slot, different patient
    let err = db
        .schedule_appointment(&appointment_for(2, 8, 5))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ScheduleError::Database(DatabaseError::ConstraintViolation {
            kind: ConstraintKind::Unique,
            ..
        })
    ));
    assert_eq!(common::appointment_hospitals(&db, 8).await, vec![5]);
}

#[tokio::test]
async fn file_backed_database_is_created_and_persists() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clinic.db");
    let url = format!("sqlite:{}", path.display());

    {
        let db = Database::new(&url).await.unwrap();
        sqlx::query("INSERT INTO hospitals (id, name) VALUES (1, 'General Hospital')")
            .execute(db.pool())
            .await
            .unwrap();
    }
    assert!(path.exists());

    let db = Database::new(&url).await.unwrap();
    let hospitals = db.list_hospitals().await.unwrap();
    assert_eq!(hospitals.len(), 1);
    assert_eq!(hospitals[0].name, "General Hospital");
}
