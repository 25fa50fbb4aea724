use crate::Result as CoreResult;
use crate::validation::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, validate_length};

/// Partial update for a project.
///
/// `None` leaves the stored value untouched, `Some` overwrites it (an empty
/// string included).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectChanges {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(name) = &self.name {
            validate_length("name", name, MAX_NAME_LENGTH)?;
        }
        if let Some(description) = &self.description {
            validate_length("description", description, MAX_DESCRIPTION_LENGTH)?;
        }
        Ok(())
    }
}
