//! Pure path rules: where the template is searched for and where output goes.
//!
//! Nothing here touches the filesystem; existence checks go through the
//! [`Filesystem`](crate::application::ports::Filesystem) port.

use std::path::{Component, Path, PathBuf};

use crate::domain::{error::DomainError, validation::DomainValidator as validator};

/// Default location of the template tree below some ancestor directory.
pub const DEFAULT_TEMPLATE_SUBPATH: &str = "template/plugin-template";

/// Where the template tree lives relative to each searched ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    subpath: PathBuf,
}

impl TemplateLayout {
    pub fn new(subpath: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let subpath = subpath.into();
        validator::validate_template_subpath(&subpath)?;
        Ok(Self { subpath })
    }

    pub fn subpath(&self) -> &Path {
        &self.subpath
    }

    /// Candidate template root below `ancestor`.
    pub fn candidate(&self, ancestor: &Path) -> PathBuf {
        ancestor.join(&self.subpath)
    }
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            subpath: PathBuf::from(DEFAULT_TEMPLATE_SUBPATH),
        }
    }
}

/// Lexically normalize a path.
///
/// `.` components are dropped and `..` removes the preceding normal
/// component. `..` directly below the root is discarded; a leading `..` on a
/// relative path is kept. Symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Absolute, normalized output directory for `artifact_id`.
///
/// `working_dir` must be absolute. An absolute `artifact_id` replaces it,
/// mirroring [`Path::join`].
pub fn output_directory(working_dir: &Path, artifact_id: &str) -> PathBuf {
    normalize(&working_dir.join(artifact_id))
}
