// Port for the ordered sequences that hold messages and calls.
//
// Boundaries
// - Appends never reorder existing records.
// - Records are never removed; only their status can change.
// - Implementations run each operation atomically.

pub mod in_memory;

use crate::shared::core::status::Status;
use crate::shared::core::tracked_record::TrackedRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("{kind} {id} already exists")]
    Duplicate { kind: &'static str, id: String },

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RecordStore<T: TrackedRecord>: Send + Sync {
    async fn append(&self, record: T) -> Result<T, StoreError>;
    async fn list(&self) -> Result<Vec<T>, StoreError>;
    async fn update_status(&self, id: &str, status: Status) -> Result<T, StoreError>;
}
