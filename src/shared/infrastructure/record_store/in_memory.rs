use crate::shared::core::status::Status;
use crate::shared::core::tracked_record::TrackedRecord;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct InMemoryRecordStore<T> {
    records: RwLock<Vec<T>>,
    is_offline: bool,
}

impl<T> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            is_offline: false,
        }
    }
}

impl<T> InMemoryRecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: TrackedRecord> RecordStore<T> for InMemoryRecordStore<T> {
    async fn append(&self, record: T) -> Result<T, StoreError> {
        self.ensure_online()?;

        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::Duplicate {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.ensure_online()?;

        Ok(self.records.read().await.clone())
    }

    async fn update_status(&self, id: &str, status: Status) -> Result<T, StoreError> {
        self.ensure_online()?;

        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })?;
        record.set_status(status);
        Ok(record.clone())
    }
}
