//! One-shot launch of the external strategy executable.
use std::process::ExitCode;

use tracing::Instrument;

use crate::{
    cli::{CommanderArgs, LaunchProfile},
    lib::{
        errors::LaunchError,
        paths::{self, resolve_paths},
        telemetry::{self, LaunchPlanTelemetry, LaunchSpan},
    },
    settings::LauncherSettings,
};

pub mod exit;
pub mod plan;
pub mod runner;

pub use exit::{
    exit_code_from_status, LaunchExit, EXIT_CONFIG_NOT_FOUND, EXIT_INTERRUPTED,
    EXIT_LAUNCH_FAILURE,
};
pub use plan::{render_banner, LaunchMode, LaunchPlan};
pub use runner::{InterruptListener, ProcessOutcome, ProcessRunner, SystemProcessRunner};

/// Plan plus the settings it was built from.
#[derive(Debug, Clone)]
pub struct PreparedLaunch {
    pub plan: LaunchPlan,
    pub settings: LauncherSettings,
}

/// Resolve paths, check the strategy config, load settings and pick the launch mode.
///
/// Touches the filesystem only through existence checks, the `configs/`
/// listing and the optional settings file.
pub fn prepare(profile: &LaunchProfile) -> Result<PreparedLaunch, LaunchError> {
    let paths = resolve_paths(&profile.install_dir);
    let config_path = paths.config_path(&profile.strategy);
    if !config_path.exists() {
        return Err(LaunchError::ConfigNotFound {
            available: paths::available_strategies(&paths.config_dir),
            path: config_path,
        });
    }

    let settings = LauncherSettings::load_for_install_dir(&paths.install_dir)?;
    let plan = LaunchPlan::resolve(&profile.strategy, config_path, &paths, &settings);
    Ok(PreparedLaunch { plan, settings })
}

/// Announce `plan` and run it to completion through `runner`.
pub async fn execute<R: ProcessRunner>(
    plan: &LaunchPlan,
    runner: &R,
) -> Result<ProcessOutcome, LaunchError> {
    println!("{}", render_banner(plan));
    telemetry::emit_launch_plan(&LaunchPlanTelemetry {
        strategy: &plan.strategy,
        mode: plan.mode.as_str(),
        config_path: plan.config_path.to_string_lossy().as_ref(),
        working_dir: plan.working_dir.to_string_lossy().as_ref(),
        command: &plan.rendered,
    });
    runner.run(plan).await
}

/// Prepare and execute `profile` with a caller-supplied runner.
pub async fn launch_with<R: ProcessRunner>(
    profile: &LaunchProfile,
    runner: &R,
) -> Result<ProcessOutcome, LaunchError> {
    let prepared = prepare(profile)?;
    execute(&prepared.plan, runner).await
}

/// CLI entry: resolve, launch, and translate the result into an exit code.
pub async fn run(args: CommanderArgs) -> ExitCode {
    let span = LaunchSpan::start(&args.strategy);
    let result = async {
        let interrupt = InterruptListener::install()?;
        let profile = args.into_profile()?;
        let prepared = prepare(&profile)?;
        let runner = SystemProcessRunner::new(prepared.settings.interrupt_grace(), interrupt);
        execute(&prepared.plan, &runner).await
    }
    .instrument(span.span().clone())
    .await;

    conclude(result, span).report()
}

/// Map a launch result to its exit, closing the span.
pub fn conclude(result: Result<ProcessOutcome, LaunchError>, span: LaunchSpan) -> LaunchExit {
    match result {
        Ok(outcome) => {
            let exit = LaunchExit::from_outcome(outcome);
            let code = match outcome {
                ProcessOutcome::Exited(code) => Some(code),
                _ => None,
            };
            span.finish(outcome.as_str(), code);
            exit
        }
        Err(err) => {
            let exit = LaunchExit::from_launch_error(&err);
            span.finish(error_status(&err), None);
            exit
        }
    }
}

fn error_status(err: &LaunchError) -> &'static str {
    match err {
        LaunchError::ConfigNotFound { .. } => "config_not_found",
        _ => "launch_failed",
    }
}
