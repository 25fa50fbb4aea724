#![allow(dead_code)]

//! Test infrastructure for pc-server API tests

use pc_db::ProjectRepository;
use pc_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// AppState over a fresh migrated in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = pc_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool)
}

pub fn repository(state: &AppState) -> ProjectRepository {
    ProjectRepository::new(state.pool.clone())
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// POST a project through the API and return its id
pub async fn create_project_via_api(app: &Router, name: &str, description: &str) -> i64 {
    let body = serde_json::json!({ "name": name, "description": description }).to_string();
    let response = send(app.clone(), json_request("POST", "/projects", &body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}
