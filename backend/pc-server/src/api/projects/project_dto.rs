use pc_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization. Timestamps are unix seconds.
#[derive(Debug, Serialize)]
pub struct ProjectDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            created_at: p.created_at.map(|ts| ts.timestamp()),
            updated_at: p.updated_at.map(|ts| ts.timestamp()),
        }
    }
}
