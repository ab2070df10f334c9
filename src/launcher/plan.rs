//! `LaunchPlan` construction: which program runs, with which arguments, where.
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::{lib::paths::ResolvedPaths, settings::LauncherSettings};

/// How the external executable is obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    /// A release build already exists at `binary`.
    PrebuiltBinary { binary: PathBuf },
    /// No release build was found; `program` builds and runs it.
    BuildAndRun { program: String },
}

impl LaunchMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LaunchMode::PrebuiltBinary { .. } => "prebuilt_binary",
            LaunchMode::BuildAndRun { .. } => "build_and_run",
        }
    }
}

/// Everything needed to start the child process, computed once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub strategy: String,
    pub config_path: PathBuf,
    pub working_dir: PathBuf,
    pub mode: LaunchMode,
    /// Program followed by its arguments; never passed through a shell.
    pub argv: Vec<OsString>,
    /// Space-joined `argv` for display. Not escaped and never re-parsed.
    pub rendered: String,
}

impl LaunchPlan {
    /// Pick the launch mode by probing for the release binary.
    pub fn resolve(
        strategy: &str,
        config_path: PathBuf,
        paths: &ResolvedPaths,
        settings: &LauncherSettings,
    ) -> Self {
        let binary = paths.release_binary(&settings.binary_name);
        let mode = if binary.exists() {
            LaunchMode::PrebuiltBinary { binary }
        } else {
            LaunchMode::BuildAndRun {
                program: settings.cargo.clone(),
            }
        };
        Self::new(
            strategy,
            config_path,
            paths.sibling_dir.clone(),
            mode,
            &settings.binary_name,
        )
    }

    /// Build a plan for an already chosen `mode`.
    pub fn new(
        strategy: &str,
        config_path: PathBuf,
        working_dir: PathBuf,
        mode: LaunchMode,
        binary_name: &str,
    ) -> Self {
        let argv = build_argv(&mode, binary_name, strategy, &config_path);
        let rendered = render_argv(&argv);
        Self {
            strategy: strategy.to_string(),
            config_path,
            working_dir,
            mode,
            argv,
            rendered,
        }
    }

    /// Program to execute (first element of `argv`).
    pub fn program(&self) -> &OsString {
        &self.argv[0]
    }

    /// Arguments after the program.
    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    pub fn binary_found(&self) -> bool {
        matches!(self.mode, LaunchMode::PrebuiltBinary { .. })
    }

    /// Lossy program name for diagnostics.
    pub fn program_label(&self) -> String {
        self.program().to_string_lossy().into_owned()
    }
}

fn build_argv(
    mode: &LaunchMode,
    binary_name: &str,
    strategy: &str,
    config_path: &Path,
) -> Vec<OsString> {
    let mut argv: Vec<OsString> = match mode {
        LaunchMode::PrebuiltBinary { binary } => vec![binary.clone().into_os_string()],
        LaunchMode::BuildAndRun { program } => [
            program.as_str(),
            "run",
            "--release",
            "--bin",
            binary_name,
            "--",
        ]
        .into_iter()
        .map(OsString::from)
        .collect(),
    };
    argv.push("--strategy".into());
    argv.push(strategy.into());
    argv.push("--config".into());
    argv.push(config_path.as_os_str().to_os_string());
    argv
}

fn render_argv(argv: &[OsString]) -> String {
    argv.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Operator-facing summary printed before the child starts.
pub fn render_banner(plan: &LaunchPlan) -> String {
    let binary_line = match &plan.mode {
        LaunchMode::PrebuiltBinary { binary } => format!("Binary found at {}", binary.display()),
        LaunchMode::BuildAndRun { program } => {
            format!("Binary not found, falling back to '{program} run'...")
        }
    };

    [
        "--- Scavenger Commander ---".to_string(),
        format!("Strategy: {}", plan.strategy),
        format!("Config:   {}", plan.config_path.display()),
        format!("CWD:      {}", plan.working_dir.display()),
        binary_line,
        format!("Executing: {}", plan.rendered),
        "-".repeat(30),
    ]
    .join("\n")
}
