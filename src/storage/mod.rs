//! Durable storage of file ids and delivery source lookup

pub mod artifacts;
pub mod file_ids;

// Re-exports for convenience
pub use artifacts::{resolve_artifact, ArtifactSource, SlotDefaults, StaticFallback};
pub use file_ids::{FileIdStore, FileRecord, FileSlot};
