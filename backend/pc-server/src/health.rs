use crate::Envelope;

use axum::Json;

pub const HEALTH_MESSAGE: &str = "service is up and running";

/// GET / - liveness check
pub async fn health() -> Json<Envelope<()>> {
    Json(Envelope::empty(HEALTH_MESSAGE))
}
