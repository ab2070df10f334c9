use std::path::Path;
use std::process::{Command, Stdio};

use anyhow::Result;

use crate::repo;

const STEPS: &[(&str, &[&str])] = &[
    ("cargo fetch", &["fetch"]),
    ("cargo check --workspace", &["check", "--workspace"]),
    ("cargo test --workspace", &["test", "--workspace"]),
    ("cargo fmt --all -- --check", &["fmt", "--all", "--", "--check"]),
    (
        "cargo clippy --workspace -- -D warnings",
        &["clippy", "--workspace", "--", "-D", "warnings"],
    ),
];

const RELEASE_STEP: (&str, &[&str]) = ("cargo build --release", &["build", "--release"]);

pub fn run(skip_release: bool) -> Result<()> {
    let root = repo::repo_root()?;
    for (label, args) in steps(skip_release) {
        run_step(&root, label, args)?;
    }
    Ok(())
}

fn steps(skip_release: bool) -> Vec<(&'static str, &'static [&'static str])> {
    let mut steps = STEPS.to_vec();
    if !skip_release {
        steps.push(RELEASE_STEP);
    }
    steps
}

fn run_step(root: &Path, label: &str, args: &[&str]) -> Result<()> {
    eprintln!("==> {label}");
    let status = Command::new("cargo")
        .args(args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("{label} failed (status {status})");
    }
    Ok(())
}
