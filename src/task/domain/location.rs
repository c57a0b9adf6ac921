//! Storage location derivation for task records.

use crate::task::ports::{ModuleDirResolver, PathResolutionError};
use camino::Utf8PathBuf;
use chrono::{DateTime, FixedOffset};

/// Module name under which task records are stored.
pub const TASK_MODULE: &str = "task";

/// Returns the record file name for a task created at `created`.
///
/// The name encodes month, day, hour, minute and second in the offset
/// `created` carries, for example `0305-070809.task`.
#[must_use]
pub fn task_file_name(created: DateTime<FixedOffset>) -> String {
    created.format("%m%d-%H%M%S.task").to_string()
}

/// Derives the record path for a task created at `created`.
///
/// The base directory comes from `resolver` for [`TASK_MODULE`] and the
/// four-digit creation year.
///
/// # Errors
///
/// Returns the resolver's [`PathResolutionError`] unchanged.
pub fn derive_task_path(
    created: DateTime<FixedOffset>,
    resolver: &(impl ModuleDirResolver + ?Sized),
) -> Result<Utf8PathBuf, PathResolutionError> {
    let year = created.format("%Y").to_string();
    let module_dir = resolver.resolve(TASK_MODULE, &year)?;
    Ok(module_dir.join(task_file_name(created)))
}
