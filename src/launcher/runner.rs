//! Child process execution with interrupt handling.
use std::{future::Future, io, process::ExitStatus, time::Duration};

use tokio::{process::Child, sync::Mutex, time};
use tracing::{info, warn};

use crate::lib::{command::build_launch_command, errors::LaunchError};

use super::LaunchPlan;

/// How the child process run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Child exited on its own with this status code.
    Exited(i32),
    /// Child was terminated by a signal other than SIGINT.
    Signaled(i32),
    /// The operator interrupted the run.
    Interrupted,
}

impl ProcessOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProcessOutcome::Exited(0) => "succeeded",
            ProcessOutcome::Exited(_) => "failed",
            ProcessOutcome::Signaled(_) => "signaled",
            ProcessOutcome::Interrupted => "interrupted",
        }
    }
}

/// Seam between launch orchestration and process creation.
pub trait ProcessRunner {
    /// Run `plan` to completion.
    fn run(&self, plan: &LaunchPlan) -> impl Future<Output = Result<ProcessOutcome, LaunchError>>;
}

/// Runner that spawns a real child and listens for SIGINT / Ctrl-C.
#[derive(Debug)]
pub struct SystemProcessRunner {
    interrupt_grace: Duration,
    interrupt: Mutex<InterruptListener>,
}

impl SystemProcessRunner {
    /// `interrupt` is installed by the caller so Ctrl-C is captured before preparation starts.
    pub fn new(interrupt_grace: Duration, interrupt: InterruptListener) -> Self {
        Self {
            interrupt_grace,
            interrupt: Mutex::new(interrupt),
        }
    }
}

impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, plan: &LaunchPlan) -> Result<ProcessOutcome, LaunchError> {
        let mut interrupt = self.interrupt.lock().await;
        let child = spawn_child(plan)?;
        supervise(
            child,
            interrupt.recv(),
            self.interrupt_grace,
            &plan.program_label(),
        )
        .await
    }
}

/// Process-wide SIGINT / Ctrl-C subscription.
///
/// Once installed, an interrupt no longer terminates the launcher; it is
/// delivered to the next `recv` instead.
#[derive(Debug)]
pub struct InterruptListener {
    #[cfg(unix)]
    inner: tokio::signal::unix::Signal,
    #[cfg(windows)]
    inner: tokio::signal::windows::CtrlC,
}

impl InterruptListener {
    #[cfg(unix)]
    pub fn install() -> Result<Self, LaunchError> {
        use tokio::signal::unix::{signal, SignalKind};

        let inner = signal(SignalKind::interrupt())
            .map_err(|source| LaunchError::InterruptHandler { source })?;
        Ok(Self { inner })
    }

    #[cfg(windows)]
    pub fn install() -> Result<Self, LaunchError> {
        let inner = tokio::signal::windows::ctrl_c()
            .map_err(|source| LaunchError::InterruptHandler { source })?;
        Ok(Self { inner })
    }

    /// Resolve on the next interrupt. Never resolves if the stream closes.
    pub async fn recv(&mut self) {
        if self.inner.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

/// Spawn the child described by `plan`.
pub fn spawn_child(plan: &LaunchPlan) -> Result<Child, LaunchError> {
    let mut command = build_launch_command(plan);
    let child = command.spawn().map_err(|source| LaunchError::Spawn {
        program: plan.program_label(),
        source,
    })?;
    info!(
        target: "commander::launch",
        pid = child.id(),
        program = %plan.program_label(),
        "Child process started"
    );
    Ok(child)
}

/// Wait for `child`, or for `interrupt` to fire first. An interrupt that is
/// ready together with the child's exit wins.
///
/// On interrupt the child gets `grace` to exit on its own before it is killed.
/// The child is reaped on every path.
pub async fn supervise<F>(
    mut child: Child,
    interrupt: F,
    grace: Duration,
    program: &str,
) -> Result<ProcessOutcome, LaunchError>
where
    F: Future<Output = ()>,
{
    let wait_error = |source: io::Error| LaunchError::Wait {
        program: program.to_string(),
        source,
    };

    // Ctrl-C reaches the child too; its exit must not mask the interrupt.
    tokio::select! {
        biased;
        _ = interrupt => {
            println!("\nStopping...");
            match time::timeout(grace, child.wait()).await {
                Ok(status) => {
                    status.map_err(wait_error)?;
                }
                Err(_) => {
                    warn!(
                        target: "commander::launch",
                        grace_ms = grace.as_millis(),
                        "Child did not exit after interrupt; killing it"
                    );
                    child.kill().await.map_err(wait_error)?;
                }
            }
            Ok(ProcessOutcome::Interrupted)
        }
        status = child.wait() => Ok(classify_status(status.map_err(wait_error)?)),
    }
}

/// Map an exit status to an outcome. A child that died from SIGINT shares the
/// operator's Ctrl-C and counts as an interruption.
pub fn classify_status(status: ExitStatus) -> ProcessOutcome {
    if let Some(code) = status.code() {
        return ProcessOutcome::Exited(code);
    }
    classify_signal(status)
}

#[cfg(unix)]
fn classify_signal(status: ExitStatus) -> ProcessOutcome {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(libc::SIGINT) => ProcessOutcome::Interrupted,
        Some(signal) => ProcessOutcome::Signaled(signal),
        None => ProcessOutcome::Exited(1),
    }
}

#[cfg(not(unix))]
fn classify_signal(_status: ExitStatus) -> ProcessOutcome {
    ProcessOutcome::Exited(1)
}
