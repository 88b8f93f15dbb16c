//! Request extractors that turn axum's plain-text rejections into
//! [`AppError`] so every client error carries the JSON error body.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use clinic_core::error::CoreError;
use clinic_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// Syntax errors and a missing `Content-Type` become `BAD_REQUEST`; bodies
/// that parse but do not fit the target type (wrong field types, missing
/// fields) become `VALIDATION_ERROR`. Both are 400.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(JsonRejection::JsonDataError(err)) => {
                Err(AppError::Core(CoreError::Validation(err.body_text())))
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// The `{id}` path segment of a patient route, parsed as a [`DbId`].
#[derive(Debug, Clone, Copy)]
pub struct PatientIdPath(pub DbId);

impl<S> FromRequestParts<S> for PatientIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::BadRequest(format!("Invalid patient ID: {}", rejection.body_text()))
            })?;
        Ok(PatientIdPath(id))
    }
}
