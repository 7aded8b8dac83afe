//! Use cases shared by every record kind.
//!
//! Each call is an independent read-then-write sequence against the
//! repository. Uniqueness and foreign keys are checked before any write; the
//! storage constraints stay authoritative for concurrent writers.

use crate::domain::repository::{CrudRepository, ReferencePort};
use crate::domain::types::Record;
use crate::error::AdminServiceError;
use crate::mapper::Mapper;

/// Fails with `AlreadyExists` when another row already holds `record`'s
/// natural key. A row matching `record`'s own id does not count.
async fn ensure_key_available<R: CrudRepository>(
    repo: &R,
    record: &R::Record,
) -> Result<(), AdminServiceError> {
    let Some(key) = record.natural_key() else {
        return Ok(());
    };
    match repo.find_by_natural_key(key).await? {
        Some(existing) if existing.id() != record.id() => Err(AdminServiceError::already_exists(
            <R::Record as Record>::KIND,
            key,
        )),
        _ => Ok(()),
    }
}

async fn ensure_references_exist<P: ReferencePort, T: Record>(
    refs: &P,
    record: &T,
) -> Result<(), AdminServiceError> {
    for reference in record.references() {
        if !refs.exists(reference.kind, reference.id).await? {
            return Err(AdminServiceError::not_found(reference.kind, reference.id));
        }
    }
    Ok(())
}

async fn fetch<R: CrudRepository>(repo: &R, id: i32) -> Result<R::Record, AdminServiceError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AdminServiceError::not_found(<R::Record as Record>::KIND, id))
}

// ── GetById ──────────────────────────────────────────────────────────────────

pub struct GetByIdUseCase<R, M> {
    pub repo: R,
    pub mapper: M,
}

impl<R, M> GetByIdUseCase<R, M>
where
    R: CrudRepository,
    M: Mapper<Record = R::Record>,
{
    pub async fn execute(&self, id: i32) -> Result<M::Response, AdminServiceError> {
        let record = fetch(&self.repo, id).await?;
        Ok(self.mapper.to_response(record))
    }
}

// ── GetByNaturalKey ──────────────────────────────────────────────────────────

pub struct GetByNaturalKeyUseCase<R, M> {
    pub repo: R,
    pub mapper: M,
}

impl<R, M> GetByNaturalKeyUseCase<R, M>
where
    R: CrudRepository,
    M: Mapper<Record = R::Record>,
{
    pub async fn execute(&self, key: &str) -> Result<M::Response, AdminServiceError> {
        let record = self.repo.find_by_natural_key(key).await?.ok_or_else(|| {
            AdminServiceError::not_found_by_key(<R::Record as Record>::KIND, key)
        })?;
        Ok(self.mapper.to_response(record))
    }
}

// ── List ─────────────────────────────────────────────────────────────────────

pub struct ListUseCase<R, M> {
    pub repo: R,
    pub mapper: M,
}

impl<R, M> ListUseCase<R, M>
where
    R: CrudRepository,
    M: Mapper<Record = R::Record>,
{
    pub async fn execute(&self) -> Result<Vec<M::Response>, AdminServiceError> {
        let records = self.repo.find_all().await?;
        Ok(self.mapper.to_response_list(records))
    }
}

// ── Create ───────────────────────────────────────────────────────────────────

pub struct CreateUseCase<R, M, P> {
    pub repo: R,
    pub mapper: M,
    pub refs: P,
}

impl<R, M, P> CreateUseCase<R, M, P>
where
    R: CrudRepository,
    M: Mapper<Record = R::Record>,
    P: ReferencePort,
{
    pub async fn execute(&self, request: M::Request) -> Result<M::Response, AdminServiceError> {
        let record = self.mapper.to_record(request);
        ensure_key_available(&self.repo, &record).await?;
        ensure_references_exist(&self.refs, &record).await?;
        let saved = self.repo.save(record).await?;
        let kind = <R::Record as Record>::KIND;
        tracing::info!(%kind, id = ?saved.id(), "record created");
        Ok(self.mapper.to_response(saved))
    }
}

// ── Update ───────────────────────────────────────────────────────────────────

pub struct UpdateUseCase<R, M, P> {
    pub repo: R,
    pub mapper: M,
    pub refs: P,
}

impl<R, M, P> UpdateUseCase<R, M, P>
where
    R: CrudRepository,
    M: Mapper<Record = R::Record>,
    P: ReferencePort,
{
    pub async fn execute(
        &self,
        id: i32,
        request: M::Request,
    ) -> Result<M::Response, AdminServiceError> {
        let mut record = fetch(&self.repo, id).await?;
        self.mapper.update_from_request(request, &mut record);
        ensure_key_available(&self.repo, &record).await?;
        ensure_references_exist(&self.refs, &record).await?;
        let saved = self.repo.save(record).await?;
        let kind = <R::Record as Record>::KIND;
        tracing::info!(%kind, id, "record updated");
        Ok(self.mapper.to_response(saved))
    }
}

// ── Delete ───────────────────────────────────────────────────────────────────

pub struct DeleteUseCase<R> {
    pub repo: R,
}

impl<R: CrudRepository> DeleteUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), AdminServiceError> {
        let record = fetch(&self.repo, id).await?;
        self.repo.delete(&record).await?;
        let kind = <R::Record as Record>::KIND;
        tracing::info!(%kind, id, "record deleted");
        Ok(())
    }
}
