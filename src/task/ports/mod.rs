//! Port contracts for task records.
//!
//! Ports define infrastructure-agnostic interfaces for the collaborators a
//! task depends on: module directory resolution and record persistence.

pub mod module_dir;
pub mod store;

#[cfg(test)]
pub use module_dir::MockModuleDirResolver;
pub use module_dir::{ModuleDirResolver, PathResolutionError};
pub use store::{TaskStore, TaskStoreError, TaskStoreResult, require_path};
