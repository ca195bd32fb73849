use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;
use crate::extract::{JsonBody, QueryParams};

/// Failure rendered as `{"success": false, "error": {"code", "message"}}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    Internal(String),
}

impl EnvelopeError {
    pub fn code(&self) -> &'static str {
        match self {
            EnvelopeError::Validation(_) => "VALIDATION_ERROR",
            EnvelopeError::NotFound(_) => "NOT_FOUND",
            EnvelopeError::Duplicate(_) => "DUPLICATE_ENTRY",
            EnvelopeError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            EnvelopeError::Validation(_) => StatusCode::BAD_REQUEST,
            EnvelopeError::NotFound(_) => StatusCode::NOT_FOUND,
            EnvelopeError::Duplicate(_) => StatusCode::CONFLICT,
            EnvelopeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for EnvelopeError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::BadRequest(message) => EnvelopeError::Validation(message),
            ApiError::NotFound(message) => EnvelopeError::NotFound(message),
            ApiError::Conflict(message) => EnvelopeError::Duplicate(message),
            ApiError::Internal(message) => EnvelopeError::Internal(message),
        }
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "compliance request failed");
        }

        let body = Json(json!({
            "success": false,
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}

/// [`JsonBody`] whose rejection uses the envelope shape.
#[derive(Debug, Clone)]
pub struct EnvelopeJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for EnvelopeJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EnvelopeError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// [`QueryParams`] whose rejection uses the envelope shape.
#[derive(Debug, Clone)]
pub struct EnvelopeQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for EnvelopeQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EnvelopeError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let QueryParams(value) = QueryParams::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}
