use axum::extract::{FromRequest, FromRequestParts, Json, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use testify_domain::validation::Validate;

use crate::error::AdminServiceError;

/// JSON body that has passed its declarative field constraints.
///
/// Malformed JSON is rejected with a single message, constraint failures with
/// the full list of violation messages.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AdminServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate().map_err(|violations| {
            AdminServiceError::Validation(
                violations
                    .into_iter()
                    .map(|v| v.message.to_owned())
                    .collect(),
            )
        })?;
        Ok(Self(value))
    }
}

/// Integer `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct RecordId(pub i32);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AdminServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
