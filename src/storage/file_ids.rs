//! Durable record of uploaded file ids
//!
//! The record is a flat JSON object keyed by slot name:
//!
//! ```json
//! {
//!   "pos_yes": "BQACAgIAAxkBAAIB...",
//!   "pos_no": "BQACAgIAAxkBAAIC..."
//! }
//! ```
//!
//! Every write reads the whole record, updates one key and writes the whole
//! record back through a temporary sibling file, so readers never observe a
//! half-written record.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::core::AppResult;

/// One of the two downloadable files the bot knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum FileSlot {
    /// Archive for shops that already have a POS system
    PosYes,
    /// Archive for shops without a POS system
    PosNo,
}

impl FileSlot {
    pub const ALL: [FileSlot; 2] = [FileSlot::PosYes, FileSlot::PosNo];

    /// Human label used in admin reports ("POS YES")
    pub fn label(self) -> &'static str {
        match self {
            FileSlot::PosYes => "POS YES",
            FileSlot::PosNo => "POS NO",
        }
    }
}

/// Snapshot of the stored slot → file id mapping
pub type FileRecord = BTreeMap<FileSlot, String>;

/// File id store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileIdStore {
    path: PathBuf,
}

impl FileIdStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored file id for `slot`
    ///
    /// Never fails: a missing, unreadable or corrupt record is logged and
    /// treated as empty.
    pub fn get(&self, slot: FileSlot) -> Option<String> {
        slot_value(&self.load_or_empty(), slot)
    }

    /// Returns both slots, skipping keys this bot does not own
    pub fn snapshot(&self) -> FileRecord {
        let entries = self.load_or_empty();
        FileSlot::ALL
            .into_iter()
            .filter_map(|slot| slot_value(&entries, slot).map(|id| (slot, id)))
            .collect()
    }

    /// Stores `file_id` for `slot`, overwriting any previous value
    ///
    /// Every other key of the record is written back untouched.
    pub fn put(&self, slot: FileSlot, file_id: &str) -> AppResult<()> {
        let mut entries = self.load_or_empty();
        entries.insert(slot.to_string(), Value::String(file_id.to_string()));

        match self.write(&entries) {
            Ok(()) => {
                log::info!("File id saved: {} = {}", slot, file_id);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save file id for {} to {}: {}", slot, self.path.display(), e);
                Err(e)
            }
        }
    }

    fn load_or_empty(&self) -> Map<String, Value> {
        match self.load() {
            Ok(entries) => entries,
            Err(e) => {
                log::error!("Failed to load file ids from {}: {}", self.path.display(), e);
                Map::new()
            }
        }
    }

    fn load(&self) -> AppResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs_err::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, entries: &Map<String, Value>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.tmp_path();
        fs_err::write(&tmp, json)?;
        if let Err(e) = fs_err::rename(&tmp, &self.path) {
            let _ = fs_err::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "file_ids.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Non-empty string stored under the slot key; other value types count as absent
fn slot_value(entries: &Map<String, Value>, slot: FileSlot) -> Option<String> {
    entries
        .get(&slot.to_string())
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
