use crate::ApiError;

use std::future::Future;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

/// `Json<T>` whose rejections render as a 400 envelope instead of axum's
/// plain-text 415/422 responses.
///
/// A zero-length body binds to `T::default()` whatever its content type.
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request(
        req: Request,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let is_json = has_json_content_type(req.headers());

            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::unable_to_bind(rejection.body_text()))?;

            if bytes.is_empty() {
                return Ok(ApiJson(T::default()));
            }

            if !is_json {
                return Err(ApiError::unable_to_bind(
                    "Expected request with `Content-Type: application/json`",
                ));
            }

            let Json(value) = Json::<T>::from_bytes(&bytes)?;
            Ok(ApiJson(value))
        }
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
