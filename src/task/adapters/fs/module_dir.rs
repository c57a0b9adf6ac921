//! Filesystem-backed module directory resolution.

use crate::task::ports::{ModuleDirResolver, PathResolutionError};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;

/// Configuration for module directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDirConfig {
    /// Root directory under which `<module>/<year>` directories live.
    pub data_root: Utf8PathBuf,
}

impl ModuleDirConfig {
    /// Creates a configuration rooted at `data_root`.
    #[must_use]
    pub fn new(data_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_root: data_root.into(),
        }
    }
}

/// Resolves `<data_root>/<module>/<year>`, creating it when missing.
#[derive(Debug, Clone)]
pub struct FsModuleDirResolver {
    config: ModuleDirConfig,
}

impl FsModuleDirResolver {
    /// Creates a resolver from configuration.
    #[must_use]
    pub const fn new(config: ModuleDirConfig) -> Self {
        Self { config }
    }

    /// Returns the configured data root.
    #[must_use]
    pub fn data_root(&self) -> &Utf8Path {
        &self.config.data_root
    }
}

impl ModuleDirResolver for FsModuleDirResolver {
    fn resolve(&self, module: &str, year: &str) -> Result<Utf8PathBuf, PathResolutionError> {
        validate_module(module)?;
        validate_year(year)?;

        let root = self.data_root();
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(|err| PathResolutionError::io(root, err))?;
        let root_dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(|err| PathResolutionError::io(root, err))?;

        let relative = Utf8Path::new(module).join(year);
        let module_dir = root.join(&relative);
        root_dir
            .create_dir_all(&relative)
            .map_err(|err| PathResolutionError::io(&module_dir, err))?;
        Ok(module_dir)
    }
}

fn validate_module(module: &str) -> Result<(), PathResolutionError> {
    let escapes = module.contains(['/', '\\']) || module == "." || module == "..";
    if module.trim().is_empty() || escapes {
        return Err(PathResolutionError::InvalidModule(module.to_owned()));
    }
    Ok(())
}

fn validate_year(year: &str) -> Result<(), PathResolutionError> {
    if year.len() != 4 || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(PathResolutionError::InvalidYear(year.to_owned()));
    }
    Ok(())
}
