pub mod api;
pub mod app_state;
pub mod error;
pub mod fallback;
pub mod health;
pub mod logger;
pub mod request_context;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    envelope::Envelope,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{api_json::ApiJson, project_id::ProjectId},
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, get_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use request_context::RequestContext;

pub use crate::routes::build_router;
