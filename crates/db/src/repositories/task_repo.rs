//! Repository for the `tasks` table.

use sqlx::{PgConnection, PgPool};
use worktrack_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

const COLUMNS: &str =
    "id, project_id, sub_division_id, code, name, description, estimated_hours, created_at";

/// Provides CRUD and batch-insert operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, sub_division_id, code, name, description, estimated_hours)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(input.sub_division_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.estimated_hours)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every task across all projects, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id");
        sqlx::query_as::<_, Task>(&query).fetch_all(pool).await
    }

    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only fields present in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                sub_division_id = CASE WHEN $2 THEN $3 ELSE sub_division_id END,
                code = COALESCE($4, code),
                name = COALESCE($5, name),
                description = CASE WHEN $6 THEN $7 ELSE description END,
                estimated_hours = CASE WHEN $8 THEN $9 ELSE estimated_hours END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.sub_division_id.is_some())
            .bind(input.sub_division_id.flatten())
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.estimated_hours.is_some())
            .bind(input.estimated_hours.flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_batch(conn: &mut PgConnection, records: &[Task]) -> Result<u64, sqlx::Error> {
        let mut written = 0;
        for record in records {
            let result = sqlx::query(
                "INSERT INTO tasks (project_id, sub_division_id, code, name, description, estimated_hours)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(record.project_id)
            .bind(record.sub_division_id)
            .bind(&record.code)
            .bind(&record.name)
            .bind(&record.description)
            .bind(record.estimated_hours)
            .execute(&mut *conn)
            .await?;
            written += result.rows_affected();
        }
        Ok(written)
    }
}
