// ABOUTME: Doctor data access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

use super::errors::DbResult;
use super::Database;
use crate::models::Doctor;

impl Database {
    /// List all doctors ordered by id.
    pub async fn list_doctors(&self) -> DbResult<Vec<Doctor>> {
        let doctors = sqlx::query_as::<_, Doctor>(
            "SELECT id, name, discipline, email, phone FROM doctors ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(doctors)
    }
}
