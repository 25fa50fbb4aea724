mod error;
mod extractors;
mod project_dto;
