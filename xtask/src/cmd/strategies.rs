use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::repo;

const DEFAULT_STRATEGY: &str = "arb";

/// Describe every `configs/*.yaml` under `dir` (or the workspace root).
pub fn run(dir: Option<PathBuf>) -> Result<Vec<String>> {
    let root = match dir {
        Some(dir) => dir,
        None => repo::repo_root()?,
    };
    describe_strategies(&root.join("configs"))
}

fn describe_strategies(configs: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(configs)
        .with_context(|| format!("failed to read {}", configs.display()))?;

    let mut found = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let bytes = std::fs::metadata(&path)?.len();
        if bytes == 0 {
            bail!("{} is empty", path.display());
        }
        found.push((name.to_string(), bytes));
    }
    found.sort();

    if !found.iter().any(|(name, _)| name == DEFAULT_STRATEGY) {
        bail!(
            "default strategy `{DEFAULT_STRATEGY}` has no config in {}",
            configs.display()
        );
    }

    Ok(found
        .into_iter()
        .map(|(name, bytes)| format!("{name}\t{bytes} bytes"))
        .collect())
}
