//! Filesystem adapters implementing the core `Filesystem` port.
//!
//! - [`LocalFilesystem`]: the real disk, used by the `ppg` binary
//! - [`MemoryFilesystem`]: shared in-memory tree for service tests

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
