use crate::ApiError;

use pc_core::{CoreError, NewProject};
use pc_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_without_id_returns_404_with_null_data() {
    let (status, json) = body_json(ApiError::project_not_found(None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "project not found");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn test_not_found_with_id_echoes_id_in_data() {
    let (status, json) = body_json(ApiError::project_not_found(Some(42))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "project not found");
    assert_eq!(json["data"], 42);
}

#[tokio::test]
async fn test_validation_error_returns_400_with_message() {
    let error = ApiError::Validation {
        message: "name must be at most 255 characters, got 300".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "name must be at most 255 characters, got 300");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn test_store_error_returns_400_without_store_details() {
    let source = DbError::Initialization {
        message: "disk on fire".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let error = ApiError::store("unable to create project", source);

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "unable to create project");
    assert!(!json.to_string().contains("disk on fire"));
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core_error: CoreError = NewProject::new("x".repeat(256), "")
        .validate()
        .unwrap_err();

    let error: ApiError = core_error.into();

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("name")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_invalid_project_id_is_validation() {
    let error = ApiError::invalid_project_id();

    match error {
        ApiError::Validation { message, .. } => assert_eq!(message, "invalid project id"),
        other => panic!("Expected Validation, got {:?}", other),
    }
}
