//! Project REST API handlers

use crate::{
    ApiError, ApiJson, ApiResult, AppState, CreateProjectRequest, Envelope, ProjectDto, ProjectId,
    UpdateProjectRequest,
};

use pc_core::{NewProject, ProjectChanges};

use axum::{Json, extract::State, http::StatusCode};

pub const PROJECT_CREATED: &str = "project created";
pub const PROJECTS_RETRIEVED: &str = "projects retrieved";
pub const PROJECT_RETRIEVED: &str = "project retrieved";
pub const PROJECT_UPDATED: &str = "project updated";

type ProjectResponse = (StatusCode, Json<Envelope<ProjectDto>>);

// =============================================================================
// Handlers
// =============================================================================

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> ApiResult<ProjectResponse> {
    let new_project = NewProject::from(req);
    new_project.validate()?;

    let project = state
        .projects()
        .create(&new_project)
        .await
        .map_err(|e| ApiError::store("unable to create project", e))?;

    log::info!("Created project {}", project.id);

    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(PROJECT_CREATED, project.into())),
    ))
}

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<Envelope<Vec<ProjectDto>>>> {
    let projects = state
        .projects()
        .find_all()
        .await
        .map_err(|e| ApiError::store("unable to display projects", e))?;

    Ok(Json(Envelope::new(
        PROJECTS_RETRIEVED,
        projects.into_iter().map(ProjectDto::from).collect(),
    )))
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> ApiResult<ProjectResponse> {
    let project = state
        .projects()
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::store("unable to display project", e))?
        .ok_or_else(|| ApiError::project_not_found(None))?;

    Ok((
        StatusCode::OK,
        Json(Envelope::new(PROJECT_RETRIEVED, project.into())),
    ))
}

/// PATCH /projects/{id}
///
/// Only the fields present in the body are overwritten.
pub async fn update_project(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
    ApiJson(req): ApiJson<UpdateProjectRequest>,
) -> ApiResult<ProjectResponse> {
    let changes = ProjectChanges::from(req);
    changes.validate()?;

    let project = state
        .projects()
        .update(id, &changes)
        .await
        .map_err(|e| ApiError::store("unable to update project", e))?
        .ok_or_else(|| ApiError::project_not_found(Some(id)))?;

    log::info!("Updated project {}", id);

    Ok((
        StatusCode::OK,
        Json(Envelope::new(PROJECT_UPDATED, project.into())),
    ))
}

/// DELETE /projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> ApiResult<StatusCode> {
    let deleted = state
        .projects()
        .delete(id)
        .await
        .map_err(|e| ApiError::store("unable to delete project", e))?;

    if !deleted {
        return Err(ApiError::project_not_found(Some(id)));
    }

    log::info!("Deleted project {}", id);

    Ok(StatusCode::NO_CONTENT)
}
