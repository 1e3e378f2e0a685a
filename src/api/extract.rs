use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::books::BOOK_NOT_FOUND;
use super::error::{ApiError, ApiResult};
use crate::models::{BookId, Validate};

/// JSON body checked against the target type's validation schema.
///
/// Drop-in replacement for `Json<T>` that rejects with a 400 carrying every
/// field violation, instead of axum's plain-text 4xx rejections.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        T::validate_json(&body)?;

        let value = serde_json::from_value(body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {}", e)))?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment as a book id.
///
/// Anything that is not an integer, including segments that are not valid
/// UTF-8 once percent-decoded, can never match a stored book and is
/// rejected as not found.
pub struct BookIdPath(pub BookId);

impl<S> FromRequestParts<S> for BookIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!("Rejecting book id path: {}", rejection.body_text());
                ApiError::NotFound(BOOK_NOT_FOUND)
            })?;
        parse_id(&raw.0).map(Self)
    }
}

fn parse_id(raw: &str) -> ApiResult<BookId> {
    raw.parse::<BookId>().map_err(|_| {
        tracing::debug!("Rejecting non-numeric book id {:?}", raw);
        ApiError::NotFound(BOOK_NOT_FOUND)
    })
}
