//! Path extractor for numeric route ids.
//!
//! Wraps axum's `Path` so that a segment which cannot be parsed as the
//! requested id type answers with the usual JSON 404 body instead of axum's
//! plain-text 400. Such an id can never name a stored row.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Route ids extracted from the request path.
///
/// Use it exactly like `Path`: `IdPath(id): IdPath<i32>` or
/// `IdPath((user_id, planet_id)): IdPath<(i32, i32)>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdPath<T>(pub T);

impl<S, T> FromRequestParts<S> for IdPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected path {}: {}", parts.uri.path(), rejection.body_text());

                Err(AppError::NotFound(format!(
                    "No existe ningún registro para la ruta {}",
                    parts.uri.path()
                )))
            }
        }
    }
}
