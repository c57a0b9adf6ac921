//! Filesystem adapters: module directory layout and JSON task records.

mod module_dir;
mod record;
mod store;

pub use module_dir::{FsModuleDirResolver, ModuleDirConfig};
pub use record::TaskRecord;
pub use store::FsTaskStore;
