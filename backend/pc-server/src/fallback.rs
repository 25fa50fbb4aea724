use crate::Envelope;

use axum::{Json, http::StatusCode};

pub const ROUTE_NOT_FOUND: &str = "route not found";
pub const METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Unknown path
pub async fn not_found() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(Envelope::empty(ROUTE_NOT_FOUND)))
}

/// Known path, unsupported method
pub async fn method_not_allowed() -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::empty(METHOD_NOT_ALLOWED)),
    )
}
