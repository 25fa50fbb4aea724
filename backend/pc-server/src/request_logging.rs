use crate::RequestContext;

use axum::{extract::Request, middleware::Next, response::Response};
use http::{HeaderName, HeaderValue};
use log::{error, info, warn};

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Middleware: log one line per request and tag the response with its id.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let ctx = RequestContext::new();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&ctx.correlation_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    if status.is_server_error() {
        error!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            method,
            path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    } else if status.is_client_error() {
        warn!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            method,
            path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    } else {
        info!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            method,
            path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    }

    response
}
