//! File-backed task store.

use super::record::TaskRecord;
use crate::task::{
    domain::Task,
    ports::{TaskStore, TaskStoreError, TaskStoreResult, require_path},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

/// Stores each task as a JSON record at its derived path.
///
/// The parent directory is expected to exist; module directory resolution
/// creates it when the path is derived. Bodies are written to a sibling
/// `.tmp` file first and then linked or renamed into place, so a failed
/// write never leaves a partial record behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTaskStore;

impl FsTaskStore {
    /// Creates a file-backed store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskStore for FsTaskStore {
    fn store(&self, task: &Task) -> TaskStoreResult<()> {
        let path = require_path(task)?;
        let body = encode(task)?;
        let (dir, file_name) = open_parent_dir(path)?;

        let staged = stage(&dir, file_name, &body)?;
        let linked = dir.hard_link(&staged, &dir, file_name);
        discard(&dir, &staged);
        linked.map_err(|err| {
            if err.kind() == ErrorKind::AlreadyExists {
                TaskStoreError::DuplicateTask(path.to_owned())
            } else {
                TaskStoreError::persistence(err)
            }
        })?;

        tracing::debug!(task_id = %task.id(), %path, "stored task record");
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let path = require_path(task)?;
        let body = encode(task)?;
        let (dir, file_name) = open_parent_dir(path)?;

        if !dir.exists(file_name) {
            return Err(TaskStoreError::NotFound(path.to_owned()));
        }
        let staged = stage(&dir, file_name, &body)?;
        dir.rename(&staged, &dir, file_name).map_err(|err| {
            discard(&dir, &staged);
            TaskStoreError::persistence(err)
        })?;

        tracing::debug!(task_id = %task.id(), %path, "updated task record");
        Ok(())
    }

    fn find_by_path(&self, path: &Utf8Path) -> TaskStoreResult<Option<Task>> {
        let (dir, file_name) = match open_parent_dir(path) {
            Ok(opened) => opened,
            Err(TaskStoreError::MissingDirectory(_)) => return Ok(None),
            Err(err) => return Err(err),
        };
        let contents = match dir.read_to_string(file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(TaskStoreError::persistence(err)),
        };

        let record: TaskRecord =
            serde_json::from_str(&contents).map_err(|err| corrupt(path, &err))?;
        let task = Task::try_from(record).map_err(|err| corrupt(path, &err))?;
        Ok(Some(task))
    }
}

fn encode(task: &Task) -> TaskStoreResult<Vec<u8>> {
    serde_json::to_vec_pretty(&TaskRecord::from(task)).map_err(TaskStoreError::persistence)
}

fn corrupt(path: &Utf8Path, err: &impl std::error::Error) -> TaskStoreError {
    TaskStoreError::Corrupt {
        path: path.to_owned(),
        reason: err.to_string(),
    }
}

/// Writes `body` to a sibling of `file_name` and returns the sibling's name.
///
/// The record itself is only touched once the body is fully on disk.
fn stage(dir: &Dir, file_name: &str, body: &[u8]) -> TaskStoreResult<Utf8PathBuf> {
    let staged = Utf8Path::new(file_name).with_extension("tmp");
    dir.write(&staged, body).map_err(|err| {
        discard(dir, &staged);
        TaskStoreError::persistence(err)
    })?;
    Ok(staged)
}

fn discard(dir: &Dir, staged: &Utf8Path) {
    match dir.remove_file(staged) {
        Err(err) if err.kind() != ErrorKind::NotFound => {
            tracing::warn!(%staged, error = %err, "failed to remove staged task record");
        }
        _ => {}
    }
}

/// Opens the parent directory of `path` and returns it with the file name.
///
/// A bare file name is looked up in the working directory.
fn open_parent_dir(path: &Utf8Path) -> TaskStoreResult<(Dir, &str)> {
    let file_name = path.file_name().ok_or_else(|| {
        TaskStoreError::persistence(std::io::Error::other(format!(
            "task path {path} must include a file name"
        )))
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            TaskStoreError::MissingDirectory(parent.to_owned())
        } else {
            TaskStoreError::persistence(err)
        }
    })?;
    Ok((dir, file_name))
}
