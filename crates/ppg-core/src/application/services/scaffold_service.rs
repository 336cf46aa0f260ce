//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve the template root by walking up from the working directory
//! 2. Refuse to touch an existing output directory
//! 3. Copy the template tree
//! 4. Substitute placeholders in every copied text file
//!
//! There is no rollback: a failed copy leaves the partial output in place.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, trace};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        CopySummary, PlaceholderMap, PluginRequest, ScaffoldOutcome, SubstitutionReport,
        TemplateLayout, normalize, output_directory,
    },
    error::{PpgError, PpgResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    layout: TemplateLayout,
}

impl ScaffoldService {
    /// Create a scaffold service searching for the default template layout.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ppg_core::application::{ScaffoldService, ports::Filesystem};
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>) {
    /// let service = ScaffoldService::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            layout: TemplateLayout::default(),
        }
    }

    /// Search for the template at a different subpath.
    pub fn with_layout(mut self, layout: TemplateLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Scaffold a new plugin project below `working_dir`.
    ///
    /// `working_dir` must be absolute; it is normalized before use.
    #[instrument(
        skip_all,
        fields(
            request = %request,
            working_dir = %working_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        request: &PluginRequest,
        working_dir: impl AsRef<Path>,
    ) -> PpgResult<ScaffoldOutcome> {
        let working_dir = working_dir.as_ref();
        if !working_dir.is_absolute() {
            return Err(PpgError::Internal {
                message: format!(
                    "working directory must be absolute, got {}",
                    working_dir.display()
                ),
            });
        }
        let working_dir = normalize(working_dir);

        // 1. Locate template
        let template_root = self.resolve_template_root(&working_dir)?;
        info!(template_root = %template_root.display(), "Template resolved");

        // 2. Output must be fresh
        let output_dir = output_directory(&working_dir, request.artifact_id());
        if self.filesystem.exists(&output_dir) {
            return Err(ApplicationError::OutputExists { path: output_dir }.into());
        }
        if output_dir.starts_with(&template_root) {
            return Err(ApplicationError::CopyFailed {
                path: output_dir,
                reason: "output directory lies inside the template tree".into(),
            }
            .into());
        }

        // 3. Copy
        let copy = self.copy_directory(&template_root, &output_dir)?;

        // 4. Substitute
        let placeholders = PlaceholderMap::for_request(request);
        let substitution = self.apply_placeholders(&output_dir, &placeholders)?;

        info!(output_dir = %output_dir.display(), "Scaffold completed successfully");
        Ok(ScaffoldOutcome {
            template_root,
            output_dir,
            copy,
            substitution,
        })
    }

    /// Find the nearest template root, checking `start` and then each parent.
    ///
    /// Stops when the filesystem root has been checked.
    pub fn resolve_template_root(&self, start: &Path) -> PpgResult<PathBuf> {
        let mut probe = Some(start);

        while let Some(dir) = probe {
            let candidate = self.layout.candidate(dir);
            trace!(candidate = %candidate.display(), "Probing for template");
            if self.filesystem.is_dir(&candidate) {
                return Ok(candidate);
            }
            probe = dir.parent();
        }

        Err(ApplicationError::TemplateNotFound {
            start: start.to_path_buf(),
            subpath: self.layout.subpath().to_path_buf(),
        }
        .into())
    }

    /// Replicate `source` at `target`. The caller checks that `target` is absent.
    #[instrument(skip_all, fields(source = %source.display(), target = %target.display()))]
    pub fn copy_directory(&self, source: &Path, target: &Path) -> PpgResult<CopySummary> {
        let summary = self.filesystem.copy_tree(source, target)?;
        debug!(
            directories = summary.directories,
            files = summary.files,
            "Template copied"
        );
        Ok(summary)
    }

    /// Rewrite placeholder tokens in every regular file below `root`.
    ///
    /// Files that are not UTF-8 text, or cannot be read or written, are left
    /// as they are and counted as skipped. Only a failure to enumerate the
    /// tree is returned as an error.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn apply_placeholders(
        &self,
        root: &Path,
        placeholders: &PlaceholderMap,
    ) -> PpgResult<SubstitutionReport> {
        let mut report = SubstitutionReport::default();

        for file in self.filesystem.list_files(root)? {
            report.visited += 1;
            match self.substitute_file(&file, placeholders) {
                Ok(true) => report.rewritten += 1,
                Ok(false) => report.unchanged += 1,
                Err(e) => {
                    debug!(path = %file.display(), error = %e, "Substitution skipped");
                    report.skipped += 1;
                }
            }
        }

        debug!(
            visited = report.visited,
            rewritten = report.rewritten,
            skipped = report.skipped,
            "Placeholders applied"
        );
        Ok(report)
    }

    /// Returns whether the file was rewritten.
    fn substitute_file(&self, path: &Path, placeholders: &PlaceholderMap) -> PpgResult<bool> {
        let content = self.filesystem.read_to_string(path)?;
        let updated = placeholders.apply(&content);
        if updated == content {
            return Ok(false);
        }
        self.filesystem.write_file(path, &updated)?;
        Ok(true)
    }
}
