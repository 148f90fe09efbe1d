//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::Serialize;

use super::DomainError;
use super::schema::Entity;

/// Affected-row metadata of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    pub rows_affected: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_insert_id: Option<u64>,
}

/// Create/read/update/delete over one catalog table.
///
/// Every write checks the table first (existence or uniqueness) and reports
/// a typed signal instead of relying on store constraints. Nothing here is
/// transactional: two concurrent creates with the same natural key can both
/// pass the uniqueness check.
#[async_trait]
pub trait CatalogRepository<E: Entity>: Send + Sync {
    /// All rows of the table; an empty table is not an error
    async fn find(&self) -> Result<Vec<E>, DomainError>;

    /// The row matching the first supplied lookup key
    async fn find_one(&self, key: E::Key) -> Result<E, DomainError>;

    /// Insert a new row after the required-field and uniqueness checks
    async fn create(&self, input: E::Input) -> Result<WriteOutcome, DomainError>;

    /// Apply the supplied fields of `patch` to row `id`
    async fn update(&self, id: i32, patch: Option<E::Input>) -> Result<WriteOutcome, DomainError>;

    /// Delete the row matching the first supplied lookup key
    async fn delete(&self, key: E::Key) -> Result<WriteOutcome, DomainError>;
}
