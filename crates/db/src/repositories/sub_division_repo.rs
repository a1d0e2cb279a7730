//! Repository for the `sub_divisions` table.

use sqlx::{PgConnection, PgPool};
use worktrack_core::types::DbId;

use crate::models::sub_division::{CreateSubDivision, SubDivision, UpdateSubDivision};

const COLUMNS: &str = "id, project_id, code, name, description, created_at";

/// Provides CRUD and batch-insert operations for sub-divisions.
pub struct SubDivisionRepo;

impl SubDivisionRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubDivision,
    ) -> Result<SubDivision, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_divisions (project_id, code, name, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubDivision>(&query)
            .bind(input.project_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SubDivision>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sub_divisions WHERE id = $1");
        sqlx::query_as::<_, SubDivision>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every sub-division across all projects, in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<SubDivision>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sub_divisions ORDER BY id");
        sqlx::query_as::<_, SubDivision>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<SubDivision>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM sub_divisions WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, SubDivision>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a sub-division. Only fields present in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubDivision,
    ) -> Result<Option<SubDivision>, sqlx::Error> {
        let query = format!(
            "UPDATE sub_divisions SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SubDivision>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sub_divisions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn insert_batch(
        conn: &mut PgConnection,
        records: &[SubDivision],
    ) -> Result<u64, sqlx::Error> {
        let mut written = 0;
        for record in records {
            let result = sqlx::query(
                "INSERT INTO sub_divisions (project_id, code, name, description)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(record.project_id)
            .bind(&record.code)
            .bind(&record.name)
            .bind(&record.description)
            .execute(&mut *conn)
            .await?;
            written += result.rows_affected();
        }
        Ok(written)
    }
}
