use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use testify_core::error::ErrorResponse;

use crate::domain::types::RecordKind;

/// Admin service error variants.
#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    AlreadyExists(String),
    #[error("{0}")]
    InUse(String),
    #[error("validation failed")]
    Validation(Vec<String>),
    #[error("{0}")]
    MalformedRequest(String),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AdminServiceError {
    pub fn not_found(kind: RecordKind, id: i32) -> Self {
        Self::NotFound(format!("No {} with id: {id}", kind.label()))
    }

    pub fn not_found_by_key(kind: RecordKind, key: &str) -> Self {
        Self::NotFound(format!("No {} with {}: {key}", kind.label(), kind.key_label()))
    }

    pub fn already_exists(kind: RecordKind, key: &str) -> Self {
        Self::AlreadyExists(format!(
            "{} with {} {key} already exists",
            kind.title(),
            kind.key_label()
        ))
    }

    pub fn in_use(kind: RecordKind, id: i32) -> Self {
        Self::InUse(format!("{} with id {id} is still referenced", kind.title()))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::InUse(_) => StatusCode::CONFLICT,
            Self::Validation(_) | Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AdminServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AdminServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for AdminServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, "internal error");
        }
        let body = match self {
            Self::Validation(errors) => ErrorResponse::with_errors(status, errors),
            other => ErrorResponse::with_message(status, other.to_string()),
        };
        body.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(error: AdminServiceError) -> (StatusCode, serde_json::Value) {
        let resp = error.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn should_return_not_found_with_id() {
        let (status, json) = body_of(AdminServiceError::not_found(RecordKind::UserRole, 999)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "No user role with id: 999");
        assert!(json.get("errors").is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_by_key() {
        let (_, json) =
            body_of(AdminServiceError::not_found_by_key(RecordKind::AppUser, "a@b.io")).await;
        assert_eq!(json["message"], "No user with email: a@b.io");
    }

    #[tokio::test]
    async fn should_return_conflict_for_duplicate_key() {
        let (status, json) =
            body_of(AdminServiceError::already_exists(RecordKind::UserRole, "Admin")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "User role with name Admin already exists");
    }

    #[tokio::test]
    async fn should_return_conflict_for_referenced_row() {
        let (status, json) = body_of(AdminServiceError::in_use(RecordKind::Course, 3)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["message"], "Course with id 3 is still referenced");
    }

    #[tokio::test]
    async fn should_return_errors_list_for_validation() {
        let (status, json) = body_of(AdminServiceError::Validation(vec![
            "User role must not be null".into(),
            "User role must not be empty".into(),
        ]))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"].as_array().unwrap().len(), 2);
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_request() {
        let (status, json) =
            body_of(AdminServiceError::MalformedRequest("expected value".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "expected value");
    }

    #[tokio::test]
    async fn should_hide_internal_cause() {
        let (status, json) =
            body_of(AdminServiceError::Internal(anyhow::anyhow!("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["message"], "Internal server error");
    }
}
