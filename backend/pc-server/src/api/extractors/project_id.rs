use crate::{ApiError, ApiResult};

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Numeric `{id}` path segment. Anything that is not an `i64` is a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectId(pub i64);

impl ProjectId {
    #[track_caller]
    pub fn parse(raw: &str) -> ApiResult<Self> {
        raw.trim()
            .parse::<i64>()
            .map(ProjectId)
            .map_err(|_| ApiError::invalid_project_id())
    }
}

impl<S> FromRequestParts<S> for ProjectId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    log::debug!("Path rejection: {}", rejection.body_text());
                    ApiError::invalid_project_id()
                })?;

            ProjectId::parse(&raw)
        }
    }
}
