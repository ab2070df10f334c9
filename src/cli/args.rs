//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use clap::Parser;

use crate::lib::errors::LaunchError;

use super::{resolve_install_dir, LaunchProfile, DEFAULT_STRATEGY};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "commander",
    author,
    version,
    about = "Scavenger Commander: run the scavenger bot with a named strategy config",
    long_about = None
)]
pub struct CommanderArgs {
    /// Strategy to run (arb, sniper); selects configs/<STRATEGY>.yaml.
    #[arg(long, default_value = DEFAULT_STRATEGY)]
    pub strategy: String,
    /// Directory holding configs/ (defaults to the launcher's install location).
    #[arg(long = "install-dir", value_name = "PATH")]
    pub install_dir: Option<PathBuf>,
}

impl CommanderArgs {
    /// Build a `LaunchProfile` from CLI args.
    pub fn into_profile(self) -> Result<LaunchProfile, LaunchError> {
        let install_dir = resolve_install_dir(self.install_dir)?;
        Ok(LaunchProfile {
            strategy: self.strategy,
            install_dir,
        })
    }
}
