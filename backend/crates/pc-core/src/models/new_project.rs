use crate::Result as CoreResult;
use crate::validation::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, validate_length};

/// Input for creating a project. Missing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

impl NewProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        validate_length("name", &self.name, MAX_NAME_LENGTH)?;
        validate_length("description", &self.description, MAX_DESCRIPTION_LENGTH)?;
        Ok(())
    }
}
