//! Field limits mirrored from the `projects` table definition.

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

pub const MAX_NAME_LENGTH: usize = 255;
pub const MAX_DESCRIPTION_LENGTH: usize = 255;

/// Reject `value` when it holds more than `max` characters.
#[track_caller]
pub fn validate_length(field: &str, value: &str, max: usize) -> CoreResult<()> {
    let length = value.chars().count();
    if length > max {
        return Err(CoreError::Validation {
            message: format!("{field} must be at most {max} characters, got {length}"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
