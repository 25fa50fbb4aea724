use crate::{
    AppState, create_project, delete_project, fallback, get_project, health, list_projects,
    request_logging, update_project,
};

use axum::{Router, middleware, routing::get};
use http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/", get(health::health))
        // Projects
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).patch(update_project).delete(delete_project),
        )
        // Envelope bodies for unmatched paths and methods
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        // Add shared state
        .with_state(state)
        .layer(cors_layer())
        // Outermost, so preflights and rejections are logged too
        .layer(middleware::from_fn(request_logging::log_requests))
}

/// Any origin; the fixed header and method lists browsers may use.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
}
