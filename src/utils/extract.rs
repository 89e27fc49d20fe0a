// src/utils/extract.rs

//! Extractors whose rejections use the app's error shapes instead of axum's
//! plain-text bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::JsonRejection},
    http::request::Parts,
};

use crate::error::{AppError, PageError};

/// `Json` whose rejection is a 400 `{error}` response.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Numeric record id from the path. Anything else is a 404, as the route
/// simply does not match such a record.
async fn record_id<S>(parts: &mut Parts, state: &S) -> Result<i64, AppError>
where
    S: Send + Sync,
{
    Path::<i64>::from_request_parts(parts, state)
        .await
        .map(|Path(id)| id)
        .map_err(|rejection| {
            tracing::debug!("Rejected record id: {}", rejection.body_text());
            AppError::NotFound("Not found".to_string())
        })
}

/// Record id for JSON endpoints.
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        record_id(parts, state).await.map(IdPath)
    }
}

/// Record id for HTML pages.
pub struct PageIdPath(pub i64);

impl<S> FromRequestParts<S> for PageIdPath
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(PageIdPath(record_id(parts, state).await?))
    }
}
