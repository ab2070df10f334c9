//! Path derivation anchored at the launcher's install directory.

use std::{
    env,
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

/// Directory (under the install dir) holding `<strategy>.yaml` files.
pub const CONFIG_DIR_NAME: &str = "configs";
/// Sibling project directory that hosts the external executable.
pub const SIBLING_DIR_NAME: &str = "scavenger";
/// Extension of strategy configuration files.
pub const CONFIG_EXTENSION: &str = "yaml";

const CARGO_TARGET_DIR_NAME: &str = "target";
const CARGO_MANIFEST: &str = "Cargo.toml";

/// Directories derived once from the install location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub install_dir: PathBuf,
    pub config_dir: PathBuf,
    pub project_root: PathBuf,
    pub sibling_dir: PathBuf,
}

impl ResolvedPaths {
    /// `<config_dir>/<strategy>.yaml`
    pub fn config_path(&self, strategy: &str) -> PathBuf {
        self.config_dir.join(format!("{strategy}.{CONFIG_EXTENSION}"))
    }

    /// Release artifact of `binary_name` inside the sibling project.
    pub fn release_binary(&self, binary_name: &str) -> PathBuf {
        self.sibling_dir
            .join(CARGO_TARGET_DIR_NAME)
            .join("release")
            .join(format!("{binary_name}{}", env::consts::EXE_SUFFIX))
    }
}

/// Derive every launcher path from `install_dir` without touching the filesystem.
pub fn resolve_paths(install_dir: &Path) -> ResolvedPaths {
    let project_root = install_dir
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(install_dir)
        .to_path_buf();

    ResolvedPaths {
        install_dir: install_dir.to_path_buf(),
        config_dir: install_dir.join(CONFIG_DIR_NAME),
        sibling_dir: project_root.join(SIBLING_DIR_NAME),
        project_root,
    }
}

/// Map an executable path to the directory the launcher is installed in.
///
/// A binary built in place (`<crate>/target/<profile>/commander`) resolves to
/// `<crate>`. When the target dir belongs to a parent workspace, the member
/// directory named after the executable is used instead. Either candidate must
/// hold a manifest and a `configs/` directory; anything else resolves to the
/// executable's own directory.
pub fn locate_install_dir(executable: &Path) -> PathBuf {
    let exe_dir = executable.parent().unwrap_or(executable);
    let exe_stem = executable.file_stem();

    exe_dir
        .ancestors()
        .filter(|ancestor| ancestor.file_name() == Some(OsStr::new(CARGO_TARGET_DIR_NAME)))
        .filter_map(Path::parent)
        .find_map(|build_root| {
            let member = exe_stem.map(|stem| build_root.join(stem));
            [Some(build_root.to_path_buf()), member]
                .into_iter()
                .flatten()
                .find(|candidate| is_launcher_crate(candidate))
        })
        .unwrap_or_else(|| exe_dir.to_path_buf())
}

fn is_launcher_crate(dir: &Path) -> bool {
    dir.join(CARGO_MANIFEST).is_file() && dir.join(CONFIG_DIR_NAME).is_dir()
}

/// Install directory of the running launcher.
pub fn current_install_dir() -> io::Result<PathBuf> {
    let executable = env::current_exe()?;
    let executable = fs::canonicalize(&executable).unwrap_or(executable);
    Ok(locate_install_dir(&executable))
}

/// Sorted strategy names that have a config file under `config_dir`.
pub fn available_strategies(config_dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(config_dir) else {
        return Vec::new();
    };

    let mut strategies: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(CONFIG_EXTENSION))
        .filter_map(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect();
    strategies.sort();
    strategies
}
