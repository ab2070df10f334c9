//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::CommanderArgs;
pub use profile::{resolve_install_dir, LaunchProfile, DEFAULT_STRATEGY};
