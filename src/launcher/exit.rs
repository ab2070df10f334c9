use std::process::ExitCode;

use crate::lib::errors::LaunchError;

use super::ProcessOutcome;

/// Exit status when `configs/<strategy>.yaml` does not exist (sysexits `EX_NOINPUT`).
pub const EXIT_CONFIG_NOT_FOUND: u8 = 66;
/// Exit status for any other launch-time failure.
pub const EXIT_LAUNCH_FAILURE: u8 = 1;
/// Exit status after an operator interruption.
pub const EXIT_INTERRUPTED: u8 = 0;

/// Bundles the operator-facing line with the exit code it maps to.
#[derive(Debug)]
pub struct LaunchExit {
    message: Option<String>,
    exit_code: ExitCode,
}

impl LaunchExit {
    pub fn success() -> Self {
        Self {
            message: None,
            exit_code: ExitCode::SUCCESS,
        }
    }

    pub fn from_outcome(outcome: ProcessOutcome) -> Self {
        match outcome {
            ProcessOutcome::Exited(0) => Self::success(),
            ProcessOutcome::Exited(code) => Self {
                message: Some(format!("\nError: Process exited with code {code}")),
                exit_code: exit_code_from_status(code),
            },
            ProcessOutcome::Signaled(signal) => Self {
                message: Some(format!("\nError: Process terminated by signal {signal}")),
                exit_code: exit_code_from_status(128 + signal),
            },
            ProcessOutcome::Interrupted => Self {
                message: None,
                exit_code: ExitCode::from(EXIT_INTERRUPTED),
            },
        }
    }

    pub fn from_launch_error(err: &LaunchError) -> Self {
        let exit_code = match err {
            LaunchError::ConfigNotFound { .. } => ExitCode::from(EXIT_CONFIG_NOT_FOUND),
            _ => ExitCode::from(EXIT_LAUNCH_FAILURE),
        };
        Self {
            message: Some(format!("Error: {err}")),
            exit_code,
        }
    }

    /// Generic failure for errors outside the launch itself (e.g. tracing setup).
    pub fn from_error(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self {
            message: Some(format!("Error: {err:#}")),
            exit_code: ExitCode::from(EXIT_LAUNCH_FAILURE),
        }
    }

    /// Print the message (if any) to stderr and hand back the exit code.
    pub fn report(self) -> ExitCode {
        if let Some(message) = &self.message {
            eprintln!("{message}");
        }
        self.exit_code
    }

    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Child status codes outside `0..=255` cannot be forwarded verbatim.
pub fn exit_code_from_status(code: i32) -> ExitCode {
    u8::try_from(code)
        .map(ExitCode::from)
        .unwrap_or(ExitCode::from(EXIT_LAUNCH_FAILURE))
}
