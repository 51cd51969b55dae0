//! Extractors whose rejections use the API's JSON error body.
//!
//! axum's stock `Json` and `Path` reject with plain text; these wrap them
//! and convert the rejection into an [`AppError`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use recipebox_core::error::CoreError;
use recipebox_core::types::DbId;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body. Missing or mistyped fields are a 422
/// `VALIDATION_ERROR`; anything else wrong with the body is a 400.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(e) => AppError::Core(CoreError::Validation(e.body_text())),
        other => AppError::BadRequest(other.body_text()),
    }
}

/// The `{id}` segment of a recipe route. A non-numeric id is a 400.
#[derive(Debug, Clone, Copy)]
pub struct RecipeId(pub DbId);

impl<S> FromRequestParts<S> for RecipeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<DbId>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| RecipeId(id))
            .map_err(path_rejection)
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "Rejected recipe id");
    AppError::BadRequest("Recipe id must be an integer".into())
}
