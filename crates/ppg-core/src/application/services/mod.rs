//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a plugin project".

pub mod scaffold_service;

pub use scaffold_service::ScaffoldService;
