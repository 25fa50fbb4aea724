#![allow(dead_code)]

//! Shared fixtures for repository tests

use pc_core::NewProject;
use pc_db::{ProjectRepository, connect_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Creates a repository over a fresh in-memory database
pub async fn create_test_repository() -> ProjectRepository {
    ProjectRepository::new(create_test_pool().await)
}

/// Creates a test NewProject numbered `n`
pub fn create_test_project(n: usize) -> NewProject {
    NewProject::new(format!("Project {}", n), format!("Description {}", n))
}
