//! Shared helper for building the child process command.

use std::process::Stdio;

use tokio::process::Command;

use crate::launcher::LaunchPlan;

/// Build the command for `plan`: argv passed verbatim, cwd pinned, stdio inherited.
pub fn build_launch_command(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(plan.program());
    command.kill_on_drop(true);
    command.current_dir(&plan.working_dir);
    command.args(plan.args());
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command
}
