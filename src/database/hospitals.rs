// ABOUTME: Hospital data access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

use super::errors::DbResult;
use super::Database;
use crate::models::Hospital;

impl Database {
    /// List all hospitals ordered by id.
    pub async fn list_hospitals(&self) -> DbResult<Vec<Hospital>> {
        let hospitals = sqlx::query_as::<_, Hospital>(
            "SELECT id, name, address, phone FROM hospitals ORDER BY id",
        )
        .fetch_all(self.pool())
        .await?;
        Ok(hospitals)
    }
}
