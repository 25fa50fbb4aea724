use crate::{CreateProjectRequest, ProjectDto};

use pc_core::{NewProject, Project};

use chrono::DateTime;

#[test]
fn test_dto_serializes_timestamps_as_unix_seconds() {
    let project = Project {
        id: 7,
        name: "A".into(),
        description: "B".into(),
        created_at: DateTime::from_timestamp(1_700_000_000, 0),
        updated_at: None,
    };

    let json = serde_json::to_value(ProjectDto::from(project)).unwrap();

    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "A");
    assert_eq!(json["description"], "B");
    assert_eq!(json["created_at"], 1_700_000_000i64);
    assert!(json["updated_at"].is_null());
}

#[test]
fn test_create_request_missing_fields_become_empty() {
    let req: CreateProjectRequest = serde_json::from_str(r#"{"name":"only name"}"#).unwrap();

    let new_project = NewProject::from(req);

    assert_eq!(new_project, NewProject::new("only name", ""));
}

#[test]
fn test_create_request_null_fields_become_empty() {
    let req: CreateProjectRequest =
        serde_json::from_str(r#"{"name":null,"description":null}"#).unwrap();

    assert_eq!(NewProject::from(req), NewProject::default());
}
