use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_commander");

/// Throwaway `<root>/commander` + `<root>/scavenger` layout.
pub struct InstallTree {
    _temp: TempDir,
    pub root: PathBuf,
    pub install_dir: PathBuf,
    pub scavenger_dir: PathBuf,
}

impl InstallTree {
    pub fn new(strategies: &[&str]) -> Result<Self> {
        let temp = tempfile::tempdir().context("failed to create temp dir")?;
        let root = temp
            .path()
            .canonicalize()
            .context("failed to canonicalize temp dir")?;
        let install_dir = root.join("commander");
        let scavenger_dir = root.join("scavenger");
        fs::create_dir_all(install_dir.join("configs")).context("failed to create configs")?;
        fs::create_dir_all(&scavenger_dir).context("failed to create scavenger dir")?;
        for strategy in strategies {
            fs::write(
                install_dir.join("configs").join(format!("{strategy}.yaml")),
                "strategy:\n  trade_amount_sol: 0.1\n",
            )
            .with_context(|| format!("failed to write {strategy}.yaml"))?;
        }
        Ok(Self {
            _temp: temp,
            root,
            install_dir,
            scavenger_dir,
        })
    }

    pub fn config_path(&self, strategy: &str) -> PathBuf {
        self.install_dir
            .join("configs")
            .join(format!("{strategy}.yaml"))
    }

    /// Place a fake release binary that records its argv and cwd, then runs `body`.
    pub fn install_fake_binary(&self, body: &str) -> Result<PathBuf> {
        let path = self.scavenger_dir.join("target/release/scavenger");
        self.write_recording_script(&path, body)?;
        Ok(path)
    }

    /// Place a fake fallback program and point `commander.toml` at it.
    pub fn install_fake_cargo(&self, body: &str) -> Result<PathBuf> {
        let path = self.root.join("bin/fake-cargo");
        self.write_recording_script(&path, body)?;
        self.write_settings(&format!("[launch]\ncargo = \"{}\"\n", path.display()))?;
        Ok(path)
    }

    pub fn write_settings(&self, content: &str) -> Result<()> {
        fs::write(self.install_dir.join("commander.toml"), content)
            .context("failed to write commander.toml")
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(BINARY_PATH);
        command
            .arg("--install-dir")
            .arg(&self.install_dir)
            .args(args)
            .env("RUST_LOG", "warn");
        command
    }

    pub fn recorded_args(&self) -> Option<Vec<String>> {
        fs::read_to_string(self.root.join("args.txt"))
            .ok()
            .map(|content| content.lines().map(str::to_string).collect())
    }

    pub fn recorded_cwd(&self) -> Option<PathBuf> {
        fs::read_to_string(self.root.join("cwd.txt"))
            .ok()
            .map(|content| PathBuf::from(content.trim()))
    }

    pub fn marker(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn write_recording_script(&self, path: &Path, body: &str) -> Result<()> {
        let parent = path.parent().context("script path has no parent")?;
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{root}/args.txt'\npwd -P > '{root}/cwd.txt'\n{body}\n",
            root = self.root.display(),
        );
        fs::write(path, script).with_context(|| format!("failed to write {}", path.display()))?;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to chmod {}", path.display()))?;
        Ok(())
    }
}
