pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_project::NewProject;
pub use models::project::{Project, timestamp_now};
pub use models::project_changes::ProjectChanges;
pub use validation::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
