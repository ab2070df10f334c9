//! Load and validate optional launcher settings (`commander.toml`).
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::SettingsError;

pub mod launch;
pub mod telemetry;

pub use launch::{
    parse_launch_section, LaunchSection, RawLaunchSection, DEFAULT_BINARY_NAME,
    DEFAULT_CARGO_PROGRAM, DEFAULT_INTERRUPT_GRACE_MS, MAX_INTERRUPT_GRACE_MS,
};

/// Settings file looked up next to the `configs/` directory.
pub const SETTINGS_FILE_NAME: &str = "commander.toml";

/// Launcher settings. The working directory and argument shape are not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherSettings {
    /// File name of the external executable (and its cargo `--bin` target).
    pub binary_name: String,
    /// Program used for the build-and-run fallback.
    pub cargo: String,
    /// How long an interrupted child may take to exit before it is killed.
    pub interrupt_grace_ms: u64,
    /// `None` when defaults were used.
    pub source_path: Option<PathBuf>,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            binary_name: DEFAULT_BINARY_NAME.to_string(),
            cargo: DEFAULT_CARGO_PROGRAM.to_string(),
            interrupt_grace_ms: DEFAULT_INTERRUPT_GRACE_MS,
            source_path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLauncherSettings {
    launch: Option<RawLaunchSection>,
}

impl LauncherSettings {
    /// Read `<install_dir>/commander.toml` if present; otherwise use defaults.
    pub fn load_for_install_dir(install_dir: &Path) -> Result<Self, SettingsError> {
        let path = install_dir.join(SETTINGS_FILE_NAME);
        if !path.is_file() {
            telemetry::log_missing(&path);
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Load settings from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, SettingsError> {
        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = SettingsError::from_read_error(path.clone(), err);
            error!(
                target: "commander::settings",
                path = %path.display(),
                reason = %error,
                "Failed to read settings file"
            );
            error
        })?;

        let raw: RawLauncherSettings = document.try_deserialize().map_err(|err| {
            let error = SettingsError::from_parse_error(path.clone(), err);
            error!(
                target: "commander::settings",
                path = %path.display(),
                reason = %error,
                "Failed to parse settings file"
            );
            error
        })?;

        let launch = parse_launch_section(raw.launch, &path).map_err(|err| {
            error!(
                target: "commander::settings",
                path = %path.display(),
                reason = %err,
                "Failed to validate settings file"
            );
            err
        })?;

        let settings = Self {
            binary_name: launch.binary_name,
            cargo: launch.cargo,
            interrupt_grace_ms: launch.interrupt_grace_ms,
            source_path: Some(path),
        };
        telemetry::log_loaded(&settings);
        Ok(settings)
    }

    pub fn interrupt_grace(&self) -> Duration {
        Duration::from_millis(self.interrupt_grace_ms)
    }
}
