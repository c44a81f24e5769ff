#![allow(dead_code)] // constructed by tests; production wiring uses JsonFileStore

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::RecordStore;
use crate::errors::AppError;
use crate::models::record::ResumeRecord;

/// In-memory record store. Mirrors `JsonFileStore` semantics without a
/// storage backend; used by tests and available for ephemeral deployments.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ResumeRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ResumeRecord>> {
        self.records.lock().expect("record store mutex poisoned")
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError> {
        Ok(self.lock().clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.lock().iter().find(|r| r.id == id).cloned())
    }

    async fn upsert(&self, record: ResumeRecord) -> Result<(), AppError> {
        let mut records = self.lock();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.insert(0, record),
        }
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.lock().retain(|r| r.id != id);
        Ok(())
    }

    async fn wipe(&self) -> Result<(), AppError> {
        self.lock().clear();
        Ok(())
    }
}
