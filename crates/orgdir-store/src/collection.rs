//! Contract between the store and the HTTP resource layer

use async_trait::async_trait;
use orgdir_domain::{DomainResult, Entity, RecordId};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A keyed collection of records exposable as a REST resource.
///
/// Every operation executes as a single transaction against the backing
/// store: it either fully succeeds or fully fails with no side effects, and
/// two operations against the same identifier serialize.
#[async_trait]
pub trait Collection: Clone + Send + Sync + 'static {
    /// URL path segment for the collection, e.g. `companies`. Doubles as the
    /// embedded key in collection representations.
    const SEGMENT: &'static str;

    /// Stored representation handed back to callers.
    type Entity: Entity + Serialize + Clone + Send + 'static;

    /// Input form accepted for insert and replace.
    type Draft: DeserializeOwned + Send + 'static;

    /// All live records at a consistent snapshot.
    async fn list(&self) -> Vec<Self::Entity>;

    /// Record by identifier.
    async fn get(&self, id: RecordId) -> DomainResult<Self::Entity>;

    /// Assign fresh identifiers, persist the draft, return the stored record.
    async fn insert(&self, draft: Self::Draft) -> DomainResult<Self::Entity>;

    /// Overwrite all mutable fields of the record at `id`. Full replacement,
    /// never a merge; the identifier stays unchanged.
    async fn replace(&self, id: RecordId, draft: Self::Draft) -> DomainResult<Self::Entity>;

    /// Delete the record at `id`, cascading to exclusively-owned records.
    async fn remove(&self, id: RecordId) -> DomainResult<()>;

    /// Delete every record in the collection.
    async fn clear(&self);
}
