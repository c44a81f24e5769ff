//! Record persistence — a single serialized collection behind a small port.
//!
//! The store is the single source of truth for what the read API serves and
//! performs no network I/O. Implementations persist the full collection on
//! every mutation (one write, no partial updates).

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::record::ResumeRecord;

/// Storage port for resume records.
///
/// Carried in `AppState` as `Arc<dyn RecordStore>` so tests can swap in
/// `MemoryStore` without a real storage backend.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records, newest-first. Absent or corrupt storage yields an empty
    /// list, never an error.
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError>;

    /// The record with a matching id, if any.
    async fn get(&self, id: Uuid) -> Result<Option<ResumeRecord>, AppError>;

    /// Inserts at the front when the id is new, otherwise replaces the
    /// existing entry in place, preserving its position.
    async fn upsert(&self, record: ResumeRecord) -> Result<(), AppError>;

    /// Deletes the matching record; no-op when absent.
    async fn remove(&self, id: Uuid) -> Result<(), AppError>;

    /// Replaces the collection with an empty one.
    async fn wipe(&self) -> Result<(), AppError>;
}
