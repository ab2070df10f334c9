use std::path::Path;

use tracing::{debug, info};

use super::{LauncherSettings, SETTINGS_FILE_NAME};

pub fn log_missing(path: &Path) {
    debug!(
        target: "commander::settings",
        path = %path.display(),
        file = SETTINGS_FILE_NAME,
        "No launcher settings file; using defaults"
    );
}

pub fn log_loaded(settings: &LauncherSettings) {
    info!(
        target: "commander::settings",
        path = ?settings.source_path.as_ref().map(|path| path.display().to_string()),
        binary_name = %settings.binary_name,
        cargo = %settings.cargo,
        interrupt_grace_ms = settings.interrupt_grace_ms,
        "Launcher settings loaded"
    );
}
