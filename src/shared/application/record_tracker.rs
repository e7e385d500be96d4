use crate::shared::core::status::Status;
use crate::shared::core::tracked_record::TrackedRecord;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use std::sync::Arc;

/// Use cases shared by messages and calls: register, list and move a record
/// through the status workflow.
pub struct RecordTracker<T: TrackedRecord> {
    store: Arc<dyn RecordStore<T>>,
}

impl<T: TrackedRecord> RecordTracker<T> {
    pub fn new(store: Arc<dyn RecordStore<T>>) -> Self {
        Self { store }
    }

    pub async fn register(&self, record: T) -> Result<T, StoreError> {
        let stored = self.store.append(record).await?;
        tracing::info!(
            kind = T::KIND,
            id = stored.id(),
            status = %stored.status(),
            "record registered"
        );
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.store.list().await
    }

    pub async fn update_status(&self, id: &str, status: Status) -> Result<T, StoreError> {
        match self.store.update_status(id, status).await {
            Ok(updated) => {
                tracing::info!(
                    kind = T::KIND,
                    id,
                    status = %updated.status(),
                    "record status updated"
                );
                Ok(updated)
            }
            Err(error) => {
                tracing::debug!(kind = T::KIND, id, %error, "record status update rejected");
                Err(error)
            }
        }
    }
}
