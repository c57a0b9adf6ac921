//! Module directory resolution port.

use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Resolves the base directory for a record module and year.
///
/// Implementations must be idempotent for the same inputs and must ensure
/// the returned directory exists.
#[cfg_attr(test, mockall::automock)]
pub trait ModuleDirResolver: Send + Sync {
    /// Returns the directory holding `module` records for `year`.
    ///
    /// # Errors
    ///
    /// Returns [`PathResolutionError`] when the directory cannot be named or
    /// created.
    fn resolve(&self, module: &str, year: &str) -> Result<Utf8PathBuf, PathResolutionError>;
}

/// Errors returned while resolving module directories.
#[derive(Debug, Clone, Error)]
pub enum PathResolutionError {
    /// The module name is empty or escapes the data root.
    #[error("invalid module name '{0}'")]
    InvalidModule(String),

    /// The year is not four ASCII digits.
    #[error("invalid year '{0}', expected four digits")]
    InvalidYear(String),

    /// Creating or opening the directory failed.
    #[error("failed to prepare module directory {path}: {source}")]
    Io {
        /// Directory that could not be prepared.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },
}

impl PathResolutionError {
    /// Wraps an I/O error for `path`.
    pub fn io(path: impl Into<Utf8PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: Arc::new(err),
        }
    }
}
