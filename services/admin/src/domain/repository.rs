use std::future::Future;

use crate::domain::types::{Record, RecordKind};
use crate::error::AdminServiceError;

// Methods return `Send` futures so routes can be mounted generically over a
// resource type. Implementations are free to use `async fn`.

/// Storage access for one record kind.
pub trait CrudRepository: Send + Sync {
    type Record: Record;

    fn find_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Self::Record>, AdminServiceError>> + Send;

    /// Lookup by the declared unique key. Kinds without one never match.
    fn find_by_natural_key(
        &self,
        _key: &str,
    ) -> impl Future<Output = Result<Option<Self::Record>, AdminServiceError>> + Send {
        async { Ok(None) }
    }

    /// All rows in ascending id order.
    fn find_all(
        &self,
    ) -> impl Future<Output = Result<Vec<Self::Record>, AdminServiceError>> + Send;

    /// Insert when the record has no id, otherwise overwrite every column of
    /// the row with that id. Returns the stored record.
    fn save(
        &self,
        record: Self::Record,
    ) -> impl Future<Output = Result<Self::Record, AdminServiceError>> + Send;

    fn delete(
        &self,
        record: &Self::Record,
    ) -> impl Future<Output = Result<(), AdminServiceError>> + Send;

    fn exists_by_id(&self, id: i32) -> impl Future<Output = Result<bool, AdminServiceError>> + Send;
}

/// Existence checks for foreign keys across record kinds.
pub trait ReferencePort: Send + Sync {
    fn exists(
        &self,
        kind: RecordKind,
        id: i32,
    ) -> impl Future<Output = Result<bool, AdminServiceError>> + Send;
}
