//! Result records produced by a scaffold run.

use std::path::{Path, PathBuf};

/// What a directory copy wrote. The target root itself is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub directories: usize,
    pub files: usize,
}

/// Per-file outcome of the placeholder pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Regular files visited.
    pub visited: usize,
    /// Files whose content changed and was written back.
    pub rewritten: usize,
    /// Files read successfully but containing no tokens.
    pub unchanged: usize,
    /// Files left as copied: not UTF-8, unreadable, or not writable.
    pub skipped: usize,
}

/// Everything the caller needs to report a finished scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub template_root: PathBuf,
    pub output_dir: PathBuf,
    pub copy: CopySummary,
    pub substitution: SubstitutionReport,
}

impl ScaffoldOutcome {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
