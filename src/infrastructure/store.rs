//! Configuration history store
//!
//! A small keyed store of configuration snapshots, most-recent-first,
//! capped at [`MAX_RECORDS`]. Records are immutable once inserted;
//! re-saving a configuration creates a new record. The file-backed
//! implementation does whole-file read-modify-write and assumes a single
//! logical writer.

use crate::workflow::{Framework, Language, OptionSet, Platform, Selection, StoreError};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Retention bound: inserts beyond this evict the oldest records.
pub const MAX_RECORDS: usize = 10;

/// A snapshot about to be inserted, before identity is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDraft {
    /// Selection to persist.
    pub selection: Selection,
    /// Rendered (or viewport-edited) document, if one should be kept.
    pub workflow: Option<String>,
}

impl ConfigDraft {
    /// Draft without a stored workflow.
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            workflow: None,
        }
    }

    /// Attaches the workflow text to persist alongside the selection.
    #[must_use]
    pub fn with_workflow(mut self, workflow: Option<String>) -> Self {
        self.workflow = workflow;
        self
    }
}

/// A persisted configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigRecord {
    /// Opaque record identity.
    pub id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Saved language.
    pub language: Language,
    /// Saved platform.
    pub platform: Platform,
    /// Saved framework.
    pub framework: Framework,
    /// Saved option flags.
    pub options: OptionSet,
    /// Saved document, when the snapshot carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<String>,
}

impl ConfigRecord {
    fn from_draft(draft: ConfigDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            language: draft.selection.language,
            platform: draft.selection.platform,
            framework: draft.selection.framework,
            options: draft.selection.options,
            workflow: draft.workflow,
        }
    }

    /// Rebuilds the selection this record snapshotted.
    ///
    /// The triple is not revalidated against the registry: a record may
    /// legitimately outlive its template.
    #[must_use]
    pub fn selection(&self) -> Selection {
        Selection::new(self.language, self.platform, self.framework).with_options(self.options)
    }

    /// Human-readable label, `language - framework - platform`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {} - {}", self.language, self.framework, self.platform)
    }
}

/// Keyed store of configuration snapshots.
#[allow(clippy::missing_errors_doc)]
pub trait ConfigStore {
    /// Inserts a draft, assigning identity and timestamp. The newest
    /// record comes first; the oldest beyond [`MAX_RECORDS`] are evicted.
    fn insert(&self, draft: ConfigDraft) -> Result<ConfigRecord, StoreError>;

    /// All records, most-recent-first. Never mutates.
    fn list(&self) -> Result<Vec<ConfigRecord>, StoreError>;

    /// Record by identity, if present.
    fn get(&self, id: Uuid) -> Result<Option<ConfigRecord>, StoreError>;

    /// Removes by identity. Absence is not an error; returns whether a
    /// record was removed.
    fn delete(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Removes every record.
    fn clear(&self) -> Result<(), StoreError>;
}

fn push_front(records: &mut Vec<ConfigRecord>, record: ConfigRecord) {
    records.insert(0, record);
    records.truncate(MAX_RECORDS);
}

/// In-memory store for embedders and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ConfigRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStore for MemoryStore {
    fn insert(&self, draft: ConfigDraft) -> Result<ConfigRecord, StoreError> {
        let record = ConfigRecord::from_draft(draft);
        push_front(&mut self.records.lock(), record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<ConfigRecord>, StoreError> {
        Ok(self.records.lock().clone())
    }

    fn get(&self, id: Uuid) -> Result<Option<ConfigRecord>, StoreError> {
        Ok(self.records.lock().iter().find(|r| r.id == id).cloned())
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut records = self.records.lock();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() != before)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.records.lock().clear();
        Ok(())
    }
}

/// File-backed store: a JSON array, rewritten whole on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens a store at `path`, creating parent directories as needed.
    /// The file itself is created on first insert.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the parent directory cannot be
    /// created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<ConfigRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, records: &[ConfigRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn insert(&self, draft: ConfigDraft) -> Result<ConfigRecord, StoreError> {
        let mut records = self.read_all()?;
        let record = ConfigRecord::from_draft(draft);
        push_front(&mut records, record.clone());
        self.write_all(&records)?;
        debug!(id = %record.id, total = records.len(), "saved configuration");
        Ok(record)
    }

    fn list(&self) -> Result<Vec<ConfigRecord>, StoreError> {
        self.read_all()
    }

    fn get(&self, id: Uuid) -> Result<Option<ConfigRecord>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|r| r.id == id))
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() != before;
        if removed {
            self.write_all(&records)?;
        }
        Ok(removed)
    }

    fn clear(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
