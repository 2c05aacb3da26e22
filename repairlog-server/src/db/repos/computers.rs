//! Computer repository
//!
//! - create: single INSERT, returns the generated id
//! - list/search: ordered by id (insertion order)
//! - get_with_repairs: computer plus its history in two reads

use sqlx::{FromRow, SqlitePool};

use super::repairs::{Repair, RepairRepo};
use super::{escape_like, DbError};
use crate::models::NewComputer;

/// Computer record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Computer {
    pub id: i64,
    pub name: String,
    pub specs: String,
    pub software: Option<String>,
}

/// Computer with its repair history for the detail view
#[derive(Debug, Clone)]
pub struct ComputerWithRepairs {
    pub computer: Computer,
    pub repairs: Vec<Repair>,
}

/// Computer repository
pub struct ComputerRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ComputerRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a computer and return its generated id.
    ///
    /// Names are not unique; two computers may share one.
    pub async fn create(&self, input: &NewComputer) -> Result<i64, DbError> {
        let result = sqlx::query("INSERT INTO computer (name, specs, software) VALUES (?, ?, ?)")
            .bind(&input.name)
            .bind(&input.specs)
            .bind(input.software())
            .execute(self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// All computers in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Computer>, DbError> {
        let computers: Vec<Computer> =
            sqlx::query_as("SELECT id, name, specs, software FROM computer ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(computers)
    }

    /// Computers whose name contains `query`.
    ///
    /// Matching uses SQLite `LIKE`, so ASCII letters compare
    /// case-insensitively. Wildcards in `query` match literally.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Computer>, DbError> {
        let computers: Vec<Computer> = sqlx::query_as(
            r#"
            SELECT id, name, specs, software
            FROM computer
            WHERE name LIKE '%' || ? || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(query))
        .fetch_all(self.pool)
        .await?;

        Ok(computers)
    }

    /// Get a single computer by id.
    pub async fn get(&self, id: i64) -> Result<Computer, DbError> {
        sqlx::query_as("SELECT id, name, specs, software FROM computer WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "computer",
                id: id.to_string(),
            })
    }

    /// Get a computer together with its repair history.
    pub async fn get_with_repairs(&self, id: i64) -> Result<ComputerWithRepairs, DbError> {
        let computer = self.get(id).await?;
        let repairs = RepairRepo::new(self.pool).list_for_computer(id).await?;

        Ok(ComputerWithRepairs { computer, repairs })
    }

    /// Total number of computers.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM computer")
            .fetch_one(self.pool)
            .await?;

        Ok(count.0)
    }
}
