//! ppg Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ppg plugin
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              ppg-cli (CLI)              │
//! │        (Implements Driving Ports)       │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ppg-adapters (Infrastructure)       │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ppg_core::prelude::*;
//!
//! # fn demo(filesystem: Box<dyn Filesystem>) -> PpgResult<()> {
//! let request = PluginRequest::new("Foo", "com.example", "demo")?;
//! let service = ScaffoldService::new(filesystem);
//! let outcome = service.scaffold(&request, "/work/checkout")?;
//! println!("{}", outcome.output_dir().display());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        CopySummary, PlaceholderMap, PluginRequest, ScaffoldOutcome, SubstitutionReport,
        TemplateLayout,
    };
    pub use crate::error::{PpgError, PpgResult};
}
