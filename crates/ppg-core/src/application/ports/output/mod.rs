//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ppg-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::CopySummary;
use crate::error::PpgResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ppg_adapters::filesystem::LocalFilesystem` (production)
/// - `ppg_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Callers pass absolute paths; the port does not resolve them
/// - `copy_tree` and `list_files` fail as a whole, the per-file
///   operations fail per file so callers can decide to skip
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file, directory, or anything else).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Recursively replicate `source` into `target`, creating `target`.
    ///
    /// Any failure is reported as `ApplicationError::CopyFailed`; whatever
    /// was written before the failure stays on disk.
    fn copy_tree(&self, source: &Path, target: &Path) -> PpgResult<CopySummary>;

    /// All regular files below `root`, recursively.
    fn list_files(&self, root: &Path) -> PpgResult<Vec<PathBuf>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> PpgResult<String>;

    /// Overwrite an existing file with `content`.
    fn write_file(&self, path: &Path, content: &str) -> PpgResult<()>;
}
