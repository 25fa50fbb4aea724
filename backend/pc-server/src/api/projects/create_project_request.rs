use pc_core::NewProject;

use serde::{Deserialize, Deserializer};

/// Missing or `null` fields are stored as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateProjectRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        NewProject::new(req.name, req.description)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
