use crate::{ApiError, ApiJson, CreateProjectRequest, ProjectId, UpdateProjectRequest};

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, header},
};

#[test]
fn test_project_id_parses_integer() {
    assert_eq!(ProjectId::parse("17").unwrap(), ProjectId(17));
    assert_eq!(ProjectId::parse("-3").unwrap(), ProjectId(-3));
}

#[test]
fn test_project_id_rejects_non_numeric() {
    for raw in ["abc", "", "1.5", "12abc", "99999999999999999999"] {
        let result = ProjectId::parse(raw);
        assert!(
            matches!(result, Err(ApiError::Validation { .. })),
            "expected rejection for {raw:?}"
        );
    }
}

#[tokio::test]
async fn test_api_json_accepts_valid_body() {
    let request = Request::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"C"}"#))
        .unwrap();

    let ApiJson(req) = ApiJson::<UpdateProjectRequest>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(req.name.as_deref(), Some("C"));
    assert_eq!(req.description, None);
}

#[tokio::test]
async fn test_api_json_malformed_body_is_validation_error() {
    let request = Request::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let result = ApiJson::<UpdateProjectRequest>::from_request(request, &()).await;

    match result {
        Err(ApiError::Validation { message, .. }) => {
            assert!(message.starts_with("unable to bind data"))
        }
        Err(other) => panic!("Expected Validation, got {:?}", other),
        Ok(_) => panic!("Expected rejection"),
    }
}

#[tokio::test]
async fn test_api_json_missing_content_type_is_validation_error() {
    let request = Request::builder()
        .body(Body::from(r#"{"name":"C"}"#))
        .unwrap();

    let result = ApiJson::<UpdateProjectRequest>::from_request(request, &()).await;

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}

#[tokio::test]
async fn test_api_json_empty_body_binds_default() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let ApiJson(req) = ApiJson::<CreateProjectRequest>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(req.name, "");
    assert_eq!(req.description, "");
}

#[tokio::test]
async fn test_api_json_accepts_json_content_type_with_charset() {
    let request = Request::builder()
        .header(header::CONTENT_TYPE, "Application/JSON; charset=utf-8")
        .body(Body::from(r#"{"description":"d"}"#))
        .unwrap();

    let ApiJson(req) = ApiJson::<UpdateProjectRequest>::from_request(request, &())
        .await
        .unwrap();

    assert_eq!(req.name, None);
    assert_eq!(req.description.as_deref(), Some("d"));
}
