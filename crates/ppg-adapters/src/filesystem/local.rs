//! Local filesystem adapter using std::fs and walkdir.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use ppg_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::CopySummary,
    error::{PpgError, PpgResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count: something already occupies the name.
        path.symlink_metadata().is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn copy_tree(&self, source: &Path, target: &Path) -> PpgResult<CopySummary> {
        let mut summary = CopySummary::default();

        for entry in WalkDir::new(source).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source).to_path_buf();
                copy_failed(path, e.to_string())
            })?;

            let relative = entry
                .path()
                .strip_prefix(source)
                .map_err(|e| copy_failed(entry.path().to_path_buf(), e.to_string()))?;
            let destination = target.join(relative);

            // A symlinked directory is not descended into; it becomes an
            // empty directory at the destination.
            if entry.file_type().is_dir() || is_linked_dir(&entry) {
                fs::create_dir_all(&destination)
                    .map_err(|e| copy_failed(destination.clone(), e.to_string()))?;
                if entry.depth() > 0 {
                    summary.directories += 1;
                }
                continue;
            }

            trace!(from = %entry.path().display(), to = %destination.display(), "Copying file");
            fs::copy(entry.path(), &destination)
                .map_err(|e| copy_failed(entry.path().to_path_buf(), e.to_string()))?;
            preserve_modified(entry.path(), &destination);
            summary.files += 1;
        }

        Ok(summary)
    }

    fn list_files(&self, root: &Path) -> PpgResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                fs_error(path, e.to_string())
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> PpgResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> PpgResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn is_linked_dir(entry: &walkdir::DirEntry) -> bool {
    entry.path_is_symlink() && entry.path().is_dir()
}

/// Carry the source modification time over to the copy.
///
/// `fs::copy` already carries permission bits; timestamps are best effort
/// and a failure only leaves the copy with the current time.
fn preserve_modified(source: &Path, destination: &Path) {
    let modified = match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(modified) => modified,
        Err(_) => return,
    };

    let result = fs::File::options()
        .write(true)
        .open(destination)
        .and_then(|file| file.set_modified(modified));

    if let Err(e) = result {
        debug!(path = %destination.display(), error = %e, "Could not preserve modification time");
    }
}

fn copy_failed(path: PathBuf, reason: String) -> PpgError {
    ApplicationError::CopyFailed { path, reason }.into()
}

fn fs_error(path: PathBuf, reason: String) -> PpgError {
    ApplicationError::FilesystemError { path, reason }.into()
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> PpgError {
    fs_error(path.to_path_buf(), format!("Failed to {operation}: {e}"))
}
