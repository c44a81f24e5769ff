use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use super::RecordStore;
use crate::errors::AppError;
use crate::models::record::ResumeRecord;

/// Current storage slot: one JSON array of records.
const RECORDS_FILE: &str = "records.json";
/// Pre-rename slot, read once for migration and then left untouched.
const LEGACY_FILE: &str = "resumes.json";

/// File-backed record store. The whole collection lives in a single JSON
/// document that is re-serialized and overwritten on every mutation.
///
/// A single-process writer is assumed; concurrent processes race with
/// last-write-wins semantics.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store under `data_dir`, creating the directory if needed
    /// and running the one-time legacy migration.
    pub fn open(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;

        let store = Self {
            path: data_dir.join(RECORDS_FILE),
        };
        store.migrate_legacy(&data_dir.join(LEGACY_FILE))?;
        Ok(store)
    }

    /// Copies the legacy slot into the current one, non-destructively.
    /// Gated on the current slot being empty, so it runs at most once
    /// effectively.
    fn migrate_legacy(&self, legacy: &Path) -> Result<()> {
        if !self.read_all().is_empty() {
            return Ok(());
        }
        let Ok(raw) = fs::read_to_string(legacy) else {
            return Ok(());
        };
        let records: Vec<ResumeRecord> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("ignoring corrupt legacy slot: {e}");
                return Ok(());
            }
        };
        if records.is_empty() {
            return Ok(());
        }

        info!(count = records.len(), "migrating records from legacy slot");
        self.write_all(&records)
    }

    /// Reads the full collection. Missing or corrupt payloads degrade to an
    /// empty collection instead of erroring.
    fn read_all(&self) -> Vec<ResumeRecord> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("treating corrupt record payload as empty: {e}");
            Vec::new()
        })
    }

    /// Serializes and overwrites the whole collection in one write.
    /// Write failures propagate to the caller.
    fn write_all(&self, records: &[ResumeRecord]) -> Result<()> {
        let payload = serde_json::to_string(records)?;
        fs::write(&self.path, payload)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError> {
        Ok(self.read_all())
    }

    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError> {
        Ok(self.read_all().into_iter().find(|r| r.id == id))
    }

    async fn upsert(&self, record: ResumeRecord) -> Result<(), AppError> {
        let mut all = self.read_all();
        match all.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => all.insert(0, record),
        }
        self.write_all(&all)?;
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        let mut all = self.read_all();
        all.retain(|r| r.id != id);
        self.write_all(&all)?;
        Ok(())
    }

    async fn wipe(&self) -> Result<(), AppError> {
        self.write_all(&[])?;
        Ok(())
    }
}
