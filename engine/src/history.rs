//! Computation history: the record model and the persistence seam.
//!
//! The engine owns the in-memory list; stores only ever see the trimmed tail.
//! Persistence is best-effort by design: a store failure degrades the session
//! to in-memory history, it never fails an evaluation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// The persisted store keeps at most this many entries, most recent last.
pub const MAX_PERSISTED_ENTRIES: usize = 20;

/// What kind of computation produced an entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Math,
    Unit,
    Currency,
}

/// One recorded computation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expr: String,
    pub result: f64,
    // Files written before the kind existed carry no "type" field
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

/// Persistence seam for computation history
pub trait HistoryStore {
    /// Load previously persisted entries, oldest first. Empty when no prior
    /// state exists.
    fn load(&self) -> io::Result<Vec<HistoryEntry>>;

    /// Persist the given entries, overwriting prior state. Callers pass at
    /// most [`MAX_PERSISTED_ENTRIES`].
    fn save(&self, entries: &[HistoryEntry]) -> io::Result<()>;
}

impl<S: HistoryStore> HistoryStore for std::sync::Arc<S> {
    fn load(&self) -> io::Result<Vec<HistoryEntry>> {
        (**self).load()
    }

    fn save(&self, entries: &[HistoryEntry]) -> io::Result<()> {
        (**self).save(entries)
    }
}

/// JSON-file-backed store
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> io::Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn save(&self, entries: &[HistoryEntry]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

/// In-memory store, used by tests and as an explicit no-persistence mode
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Snapshot of what was last saved
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.lock().expect("history lock poisoned").clone()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> io::Result<Vec<HistoryEntry>> {
        Ok(self.entries())
    }

    fn save(&self, entries: &[HistoryEntry]) -> io::Result<()> {
        *self.entries.lock().expect("history lock poisoned") = entries.to_vec();
        Ok(())
    }
}
