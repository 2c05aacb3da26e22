//! Repair repository
//!
//! Repairs are append-only. Creation checks the owning computer inside the
//! insert transaction, so a repair never points at a missing computer.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::DbError;
use crate::models::NewRepair;

/// Repair record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Repair {
    pub id: i64,
    pub date: DateTime<Utc>,
    pub detail: String,
    pub computer_id: i64,
}

/// Repair repository
pub struct RepairRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> RepairRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a repair to a computer's history, timestamped now.
    ///
    /// Returns `NotFound` when the computer does not exist; nothing is
    /// written in that case.
    pub async fn create(&self, computer_id: i64, input: &NewRepair) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM computer WHERE id = ?)")
            .bind(computer_id)
            .fetch_one(&mut *tx)
            .await?;

        if !exists.0 {
            return Err(DbError::NotFound {
                resource: "computer",
                id: computer_id.to_string(),
            });
        }

        let result =
            sqlx::query("INSERT INTO repair (date, detail, computer_id) VALUES (?, ?, ?)")
                .bind(Utc::now())
                .bind(&input.detail)
                .bind(computer_id)
                .execute(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(result.last_insert_rowid())
    }

    /// A computer's repairs in creation order.
    pub async fn list_for_computer(&self, computer_id: i64) -> Result<Vec<Repair>, DbError> {
        let repairs: Vec<Repair> = sqlx::query_as(
            r#"
            SELECT id, date, detail, computer_id
            FROM repair
            WHERE computer_id = ?
            ORDER BY id
            "#,
        )
        .bind(computer_id)
        .fetch_all(self.pool)
        .await?;

        Ok(repairs)
    }
}
