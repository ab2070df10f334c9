//! Entry point for Scavenger Commander.
use std::process::ExitCode;

use clap::Parser;
use scavenger_commander::{
    cli::CommanderArgs,
    launcher::{self, LaunchExit},
    lib::telemetry,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(err) = telemetry::init_tracing() {
        return LaunchExit::from_error(err).report();
    }
    let args = CommanderArgs::parse();
    launcher::run(args).await
}
