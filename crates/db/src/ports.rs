//! PostgreSQL implementations of the bulk-import repository port.
//!
//! Each store owns a pool handle and delegates to its zero-sized
//! repository. A batch is written inside one transaction; a unique
//! constraint violation rolls the whole batch back and is answered as a
//! `Conflict` result, which the import orchestrator escalates.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use worktrack_core::import::{ImportRecord, ImportRepository, ImportResult};

use crate::models::project::Project;
use crate::models::sub_division::SubDivision;
use crate::models::task::Task;
use crate::repositories::{ProjectRepo, SubDivisionRepo, TaskRepo};

/// PostgreSQL error code for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Name of the unique constraint `err` violated, if that is what it is.
fn unique_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Some(db_err.constraint().unwrap_or("unknown").to_string())
        }
        _ => None,
    }
}

/// Commit on success; turn a unique violation into a `Conflict` answer.
///
/// Dropping `tx` without committing rolls the batch back.
async fn finish_import(
    tx: Transaction<'_, Postgres>,
    kind: &str,
    outcome: Result<u64, sqlx::Error>,
) -> Result<ImportResult, sqlx::Error> {
    match outcome {
        Ok(written) => {
            tx.commit().await?;
            Ok(ImportResult::ok(
                written as usize,
                format!("imported {written} {kind} record(s)"),
            ))
        }
        Err(err) => match unique_violation(&err) {
            Some(constraint) => {
                tracing::warn!(kind, %constraint, "Import batch hit a unique constraint");
                Ok(ImportResult::conflict_message(format!(
                    "unique constraint {constraint} rejected the batch"
                )))
            }
            None => Err(err),
        },
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Import port for projects.
#[derive(Clone)]
pub struct PgProjectStore {
    pool: PgPool,
}

impl PgProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportRepository<Project> for PgProjectStore {
    type Error = sqlx::Error;

    async fn get_all(&self) -> Result<Vec<Project>, sqlx::Error> {
        ProjectRepo::list(&self.pool).await
    }

    async fn import(&self, records: &[Project]) -> Result<ImportResult, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let outcome = ProjectRepo::insert_batch(&mut tx, records).await;
        finish_import(tx, Project::KIND, outcome).await
    }
}

// ---------------------------------------------------------------------------
// Sub-divisions
// ---------------------------------------------------------------------------

/// Import port for sub-divisions.
#[derive(Clone)]
pub struct PgSubDivisionStore {
    pool: PgPool,
}

impl PgSubDivisionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportRepository<SubDivision> for PgSubDivisionStore {
    type Error = sqlx::Error;

    async fn get_all(&self) -> Result<Vec<SubDivision>, sqlx::Error> {
        SubDivisionRepo::list(&self.pool).await
    }

    async fn import(&self, records: &[SubDivision]) -> Result<ImportResult, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let outcome = SubDivisionRepo::insert_batch(&mut tx, records).await;
        finish_import(tx, SubDivision::KIND, outcome).await
    }
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Import port for tasks.
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImportRepository<Task> for PgTaskStore {
    type Error = sqlx::Error;

    async fn get_all(&self) -> Result<Vec<Task>, sqlx::Error> {
        TaskRepo::list(&self.pool).await
    }

    async fn import(&self, records: &[Task]) -> Result<ImportResult, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let outcome = TaskRepo::insert_batch(&mut tx, records).await;
        finish_import(tx, Task::KIND, outcome).await
    }
}
