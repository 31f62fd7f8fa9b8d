//! Ordered lookup of the file to deliver for a slot
//!
//! Resolution order:
//! 1. file id stored by an admin upload
//! 2. file id pre-seeded in the environment
//! 3. local file re-uploaded from disk
//!
//! Operators rely on 2 and 3 to serve files before the first admin upload.

use std::path::{Path, PathBuf};

use super::file_ids::{FileIdStore, FileSlot};
use crate::core::{config, AppError, AppResult};

/// Deploy-time defaults for one slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotDefaults {
    pub file_id: Option<String>,
    pub path: PathBuf,
}

/// Static configuration consulted when the store has no file id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticFallback {
    pub pos_yes: SlotDefaults,
    pub pos_no: SlotDefaults,
}

impl StaticFallback {
    /// Builds the fallback from `POS_*_FILE_ID` / `POS_*_FILE_PATH`
    pub fn from_env() -> Self {
        Self {
            pos_yes: SlotDefaults {
                file_id: config::files::POS_YES_FILE_ID.clone(),
                path: PathBuf::from(config::files::POS_YES_FILE_PATH.as_str()),
            },
            pos_no: SlotDefaults {
                file_id: config::files::POS_NO_FILE_ID.clone(),
                path: PathBuf::from(config::files::POS_NO_FILE_PATH.as_str()),
            },
        }
    }

    pub fn slot(&self, slot: FileSlot) -> &SlotDefaults {
        match slot {
            FileSlot::PosYes => &self.pos_yes,
            FileSlot::PosNo => &self.pos_no,
        }
    }
}

/// Where the bytes for a delivery come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    /// Previously uploaded file, re-sent by Telegram file id
    FileId(String),
    /// Local file uploaded again
    Path(PathBuf),
}

/// Resolves what to send for `slot`, or `MissingArtifact` if nothing is available
pub fn resolve_artifact(store: &FileIdStore, fallback: &StaticFallback, slot: FileSlot) -> AppResult<ArtifactSource> {
    if let Some(file_id) = store.get(slot) {
        return Ok(ArtifactSource::FileId(file_id));
    }

    let defaults = fallback.slot(slot);
    if let Some(file_id) = defaults.file_id.as_deref().filter(|id| !id.is_empty()) {
        log::debug!("Using configured default file id for {}", slot);
        return Ok(ArtifactSource::FileId(file_id.to_string()));
    }

    if is_regular_file(&defaults.path) {
        log::debug!("Re-uploading {} from {}", slot, defaults.path.display());
        return Ok(ArtifactSource::Path(defaults.path.clone()));
    }

    log::warn!(
        "No file available for {}: nothing stored, no default id, {} missing",
        slot,
        defaults.path.display()
    );
    Err(AppError::MissingArtifact(slot))
}

fn is_regular_file(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn fallback_with(dir: &TempDir, file_id: Option<&str>) -> StaticFallback {
        StaticFallback {
            pos_yes: SlotDefaults {
                file_id: file_id.map(str::to_string),
                path: dir.path().join("pos_yes.zip"),
            },
            pos_no: SlotDefaults {
                file_id: None,
                path: dir.path().join("pos_no.zip"),
            },
        }
    }

    #[test]
    fn test_stored_id_wins_over_everything() {
        let dir = TempDir::new().unwrap();
        let store = FileIdStore::new(dir.path().join("file_ids.json"));
        store.put(FileSlot::PosYes, "stored").unwrap();
        std::fs::write(dir.path().join("pos_yes.zip"), b"zip").unwrap();

        let source = resolve_artifact(&store, &fallback_with(&dir, Some("configured")), FileSlot::PosYes).unwrap();
        assert_eq!(source, ArtifactSource::FileId("stored".to_string()));
    }

    #[test]
    fn test_configured_id_wins_over_path() {
        let dir = TempDir::new().unwrap();
        let store = FileIdStore::new(dir.path().join("file_ids.json"));
        std::fs::write(dir.path().join("pos_yes.zip"), b"zip").unwrap();

        let source = resolve_artifact(&store, &fallback_with(&dir, Some("configured")), FileSlot::PosYes).unwrap();
        assert_eq!(source, ArtifactSource::FileId("configured".to_string()));
    }

    #[test]
    fn test_empty_configured_id_is_skipped() {
        let dir = TempDir::new().unwrap();
        let store = FileIdStore::new(dir.path().join("file_ids.json"));
        std::fs::write(dir.path().join("pos_yes.zip"), b"zip").unwrap();

        let source = resolve_artifact(&store, &fallback_with(&dir, Some("")), FileSlot::PosYes).unwrap();
        assert_eq!(source, ArtifactSource::Path(dir.path().join("pos_yes.zip")));
    }

    #[test]
    fn test_missing_everything_reports_missing_artifact() {
        let dir = TempDir::new().unwrap();
        let store = FileIdStore::new(dir.path().join("file_ids.json"));

        let err = resolve_artifact(&store, &fallback_with(&dir, None), FileSlot::PosNo).unwrap_err();
        assert!(matches!(err, AppError::MissingArtifact(FileSlot::PosNo)));
    }

    #[test]
    fn test_directory_is_not_a_deliverable_file() {
        let dir = TempDir::new().unwrap();
        let store = FileIdStore::new(dir.path().join("file_ids.json"));
        std::fs::create_dir(dir.path().join("pos_no.zip")).unwrap();

        assert!(resolve_artifact(&store, &fallback_with(&dir, None), FileSlot::PosNo).is_err());
    }
}
