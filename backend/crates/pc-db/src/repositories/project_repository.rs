//! Project repository for CRUD operations on projects.
//!
//! Update and delete are single `... RETURNING` statements: a missing row
//! yields no returned row, never an affected-row count, and each write takes
//! the SQLite write lock up front so the busy timeout applies.

use crate::{DbError, Result as DbErrorResult};

use pc_core::{NewProject, Project, ProjectChanges, timestamp_now};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const SELECT_ALL: &str = r#"
    SELECT id, name, description, created_at, updated_at
    FROM projects
    ORDER BY id
"#;

const SELECT_BY_ID: &str = r#"
    SELECT id, name, description, created_at, updated_at
    FROM projects
    WHERE id = ?
"#;

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: String,
    created_at: Option<i64>,
    updated_at: Option<i64>,
}

impl ProjectRow {
    fn into_project(self) -> DbErrorResult<Project> {
        Ok(Project {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: Self::timestamp(self.created_at, "created_at")?,
            updated_at: Self::timestamp(self.updated_at, "updated_at")?,
        })
    }

    fn timestamp(value: Option<i64>, column: &str) -> DbErrorResult<Option<DateTime<Utc>>> {
        value
            .map(|ts| {
                DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Decode {
                    column: format!("projects.{}", column),
                    message: format!("timestamp {} is out of range", ts),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()
    }
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a project and return it with its generated id and timestamps.
    pub async fn create(&self, project: &NewProject) -> DbErrorResult<Project> {
        let now = timestamp_now();
        let ts = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO projects (name, description, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(ts)
        .bind(ts)
        .execute(&self.pool)
        .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            name: project.name.clone(),
            description: project.description.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    /// All projects in insertion (id) order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(ProjectRow::into_project)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Apply `changes` to the project with `id` and return the stored row.
    ///
    /// `None` fields keep their stored value. Returns `None` when no project
    /// has that id; nothing is written then.
    pub async fn update(
        &self,
        id: i64,
        changes: &ProjectChanges,
    ) -> DbErrorResult<Option<Project>> {
        let updated_at = timestamp_now().timestamp();

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                UPDATE projects
                SET name = COALESCE(?, name),
                    description = COALESCE(?, description),
                    updated_at = ?
                WHERE id = ?
                RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(changes.name.as_deref())
        .bind(changes.description.as_deref())
        .bind(updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProjectRow::into_project).transpose()
    }

    /// Hard delete. Returns false when no project has that id.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let deleted =
            sqlx::query_scalar::<_, i64>("DELETE FROM projects WHERE id = ? RETURNING id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(deleted.is_some())
    }
}
