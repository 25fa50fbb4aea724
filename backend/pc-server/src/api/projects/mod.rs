pub mod create_project_request;
pub mod project_dto;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod update_project_request;
