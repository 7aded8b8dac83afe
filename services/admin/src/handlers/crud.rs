//! Route handlers shared by every resource family.
//!
//! Handlers only extract, call one use case and pick the status code. A
//! [`Resource`] ties a record kind to its repository, mapper and bodies.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use testify_domain::validation::Validate;

use crate::domain::repository::CrudRepository;
use crate::error::AdminServiceError;
use crate::extract::{RecordId, ValidatedJson};
use crate::mapper::Mapper;
use crate::state::AppState;
use crate::usecase::crud::{
    CreateUseCase, DeleteUseCase, GetByIdUseCase, GetByNaturalKeyUseCase, ListUseCase,
    UpdateUseCase,
};

pub trait Resource: Send + Sync + 'static {
    type Request: DeserializeOwned + Validate + Send + 'static;
    type Response: Serialize + Send + 'static;
    type Repo: CrudRepository;
    type Mapper: Mapper<
            Record = <Self::Repo as CrudRepository>::Record,
            Request = Self::Request,
            Response = Self::Response,
        >;

    /// Path segment under `/api/v1/admin`.
    const SEGMENT: &'static str;

    fn repo(state: &AppState) -> Self::Repo;

    fn mapper() -> Self::Mapper;
}

// ── GET /{segment}/{id} ──────────────────────────────────────────────────────

pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<R::Response>, AdminServiceError> {
    let usecase = GetByIdUseCase {
        repo: R::repo(&state),
        mapper: R::mapper(),
    };
    Ok(Json(usecase.execute(id).await?))
}

// ── GET /{segment}/{keyLabel}/{key} ──────────────────────────────────────────

pub async fn get_by_natural_key<R: Resource>(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> Result<Json<R::Response>, AdminServiceError> {
    let Path(key) = key?;
    let usecase = GetByNaturalKeyUseCase {
        repo: R::repo(&state),
        mapper: R::mapper(),
    };
    Ok(Json(usecase.execute(&key).await?))
}

// ── GET /{segment} ───────────────────────────────────────────────────────────

pub async fn list<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Response>>, AdminServiceError> {
    let usecase = ListUseCase {
        repo: R::repo(&state),
        mapper: R::mapper(),
    };
    Ok(Json(usecase.execute().await?))
}

// ── POST /{segment} ──────────────────────────────────────────────────────────

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<R::Request>,
) -> Result<(StatusCode, Json<R::Response>), AdminServiceError> {
    let usecase = CreateUseCase {
        repo: R::repo(&state),
        mapper: R::mapper(),
        refs: state.reference_checker(),
    };
    let created = usecase.execute(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

// ── PUT /{segment}/{id} ──────────────────────────────────────────────────────

pub async fn update<R: Resource>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(body): ValidatedJson<R::Request>,
) -> Result<Json<R::Response>, AdminServiceError> {
    let usecase = UpdateUseCase {
        repo: R::repo(&state),
        mapper: R::mapper(),
        refs: state.reference_checker(),
    };
    Ok(Json(usecase.execute(id, body).await?))
}

// ── DELETE /{segment}/{id} ───────────────────────────────────────────────────

pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<StatusCode, AdminServiceError> {
    let usecase = DeleteUseCase {
        repo: R::repo(&state),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
