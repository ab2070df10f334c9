use anyhow::Result;

use crate::common::InstallTree;

#[test]
fn missing_binary_runs_build_and_run_fallback() -> Result<()> {
    let tree = InstallTree::new(&["arb"])?;
    tree.install_fake_cargo("exit 0")?;

    let output = tree.command(&["--strategy", "arb"]).output()?;

    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    assert_eq!(
        tree.recorded_args(),
        Some(vec![
            "run".to_string(),
            "--release".into(),
            "--bin".into(),
            "scavenger".into(),
            "--".into(),
            "--strategy".into(),
            "arb".into(),
            "--config".into(),
            tree.config_path("arb").display().to_string(),
        ])
    );
    assert_eq!(tree.recorded_cwd(), Some(tree.scavenger_dir.clone()));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Binary not found"), "stdout:\n{stdout}");
    Ok(())
}

#[test]
fn fallback_failure_code_is_forwarded() -> Result<()> {
    let tree = InstallTree::new(&["arb"])?;
    tree.install_fake_cargo("exit 101")?;

    let output = tree.command(&[]).output()?;

    assert_eq!(output.status.code(), Some(101), "output: {output:?}");
    Ok(())
}

#[test]
fn missing_fallback_tool_is_a_launch_failure() -> Result<()> {
    let tree = InstallTree::new(&["arb"])?;
    let missing = tree.root.join("bin/no-such-cargo");
    tree.write_settings(&format!("[launch]\ncargo = \"{}\"\n", missing.display()))?;

    let output = tree.command(&[]).output()?;

    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to launch"), "stderr:\n{stderr}");
    Ok(())
}
