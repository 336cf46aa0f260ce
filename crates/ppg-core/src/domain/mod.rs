// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for ppg.
//!
//! This module contains pure rules with ZERO I/O:
//!
//! - **Request**: the validated `PluginName` / `GroupId` / `ArtifactId` triple
//! - **Placeholders**: the ordered token map and literal substitution
//! - **Paths**: template layout, lexical normalization, output location
//! - **Reports**: what a scaffold run copied and rewrote
//!
//! All filesystem access happens through the ports in
//! [`crate::application::ports`].
pub mod error;
pub mod paths;
pub mod placeholders;
pub mod report;
pub mod request;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use paths::{DEFAULT_TEMPLATE_SUBPATH, TemplateLayout, normalize, output_directory};
pub use placeholders::{ARTIFACT_ID_TOKEN, GROUP_ID_TOKEN, PLUGIN_NAME_TOKEN, PlaceholderMap};
pub use report::{CopySummary, ScaffoldOutcome, SubstitutionReport};
pub use request::PluginRequest;
pub use validation::DomainValidator;
