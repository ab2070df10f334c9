//! LaunchProfile and install-dir resolution.
use std::{fs, path::PathBuf};

use crate::lib::{errors::LaunchError, paths};

/// Strategy used when `--strategy` is not given.
pub const DEFAULT_STRATEGY: &str = "arb";

/// Resolved launch inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub strategy: String,
    pub install_dir: PathBuf,
}

/// Resolve the install directory: `--install-dir` override, else the launcher's own location.
///
/// The override is canonicalized so that `..` components and symlinks cannot
/// shift the sibling directory derived from it.
pub fn resolve_install_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, LaunchError> {
    let Some(dir) = override_dir else {
        return paths::current_install_dir()
            .map_err(|source| LaunchError::InstallDirUnavailable { source });
    };

    fs::canonicalize(&dir).map_err(|source| LaunchError::InstallDirUnavailable { source })
}
