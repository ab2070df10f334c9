//! Telemetry initialization and launch span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing` and format developer logs on stderr.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span covering one launch, from plan to child termination.
pub struct LaunchSpan {
    span: Span,
    started_at: Instant,
    launch_id: Uuid,
}

impl LaunchSpan {
    pub fn start(strategy: &str) -> Self {
        let launch_id = Uuid::new_v4();
        let span = info_span!(
            target: "commander::launch",
            "launch",
            %launch_id,
            strategy
        );
        Self {
            span,
            started_at: Instant::now(),
            launch_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    pub fn launch_id(&self) -> Uuid {
        self.launch_id
    }

    /// Close the span while recording status and completion info.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "commander::launch",
            launch_id = %self.launch_id,
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Launch finished"
        );
    }
}

/// Payload describing the resolved launch plan.
#[derive(Debug)]
pub struct LaunchPlanTelemetry<'a> {
    pub strategy: &'a str,
    pub mode: &'a str,
    pub config_path: &'a str,
    pub working_dir: &'a str,
    pub command: &'a str,
}

pub fn emit_launch_plan(telemetry: &LaunchPlanTelemetry<'_>) {
    debug!(
        target: "commander::launch",
        strategy = telemetry.strategy,
        mode = telemetry.mode,
        config_path = telemetry.config_path,
        working_dir = telemetry.working_dir,
        command = telemetry.command,
        "Resolved launch plan"
    );
}
