use crate::{NewProject, timestamp_now};

#[test]
fn test_new_project_defaults_to_empty_fields() {
    let project = NewProject::default();

    assert_eq!(project.name, "");
    assert_eq!(project.description, "");
    assert!(project.validate().is_ok());
}

#[test]
fn test_timestamp_now_has_no_subseconds() {
    let now = timestamp_now();
    assert_eq!(now.timestamp_subsec_nanos(), 0);
}
