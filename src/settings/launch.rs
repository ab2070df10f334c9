use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::SettingsError;

pub const DEFAULT_BINARY_NAME: &str = "scavenger";
pub const DEFAULT_CARGO_PROGRAM: &str = "cargo";
pub const DEFAULT_INTERRUPT_GRACE_MS: u64 = 250;
pub const MAX_INTERRUPT_GRACE_MS: u64 = 60_000;

/// `[launch]` section after defaults and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSection {
    pub binary_name: String,
    pub cargo: String,
    pub interrupt_grace_ms: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLaunchSection {
    pub binary_name: Option<String>,
    pub cargo: Option<String>,
    pub interrupt_grace_ms: Option<u64>,
}

pub fn parse_launch_section(
    raw: Option<RawLaunchSection>,
    path: &Path,
) -> Result<LaunchSection, SettingsError> {
    let launch_raw = raw.unwrap_or_default();

    let binary_name = launch_raw
        .binary_name
        .unwrap_or_else(|| DEFAULT_BINARY_NAME.to_string());
    validate_binary_name(&binary_name, path)?;

    let cargo = launch_raw
        .cargo
        .unwrap_or_else(|| DEFAULT_CARGO_PROGRAM.to_string());
    if cargo.trim().is_empty() {
        return Err(SettingsError::InvalidField {
            path: path.to_path_buf(),
            field: "launch.cargo",
            message: "must not be empty".into(),
        });
    }

    let interrupt_grace_ms = launch_raw
        .interrupt_grace_ms
        .unwrap_or(DEFAULT_INTERRUPT_GRACE_MS);
    if interrupt_grace_ms > MAX_INTERRUPT_GRACE_MS {
        return Err(SettingsError::InvalidField {
            path: path.to_path_buf(),
            field: "launch.interrupt_grace_ms",
            message: format!("Use a value no larger than {MAX_INTERRUPT_GRACE_MS}"),
        });
    }

    Ok(LaunchSection {
        binary_name,
        cargo,
        interrupt_grace_ms,
    })
}

fn validate_binary_name(name: &str, path: &Path) -> Result<(), SettingsError> {
    if name.trim().is_empty() {
        return Err(SettingsError::InvalidField {
            path: path.to_path_buf(),
            field: "launch.binary_name",
            message: "must not be empty".into(),
        });
    }
    if name.contains(['/', '\\']) {
        return Err(SettingsError::InvalidField {
            path: path.to_path_buf(),
            field: "launch.binary_name",
            message: "must be a file name, not a path".into(),
        });
    }
    Ok(())
}
