use anyhow::Result;

use crate::common::InstallTree;

#[test]
fn prebuilt_binary_receives_strategy_and_config() -> Result<()> {
    let tree = InstallTree::new(&["arb", "sniper"])?;
    tree.install_fake_binary("exit 0")?;

    let output = tree.command(&["--strategy", "sniper"]).output()?;

    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    let config = tree.config_path("sniper");
    assert_eq!(
        tree.recorded_args(),
        Some(vec![
            "--strategy".to_string(),
            "sniper".into(),
            "--config".into(),
            config.display().to_string(),
        ])
    );
    assert_eq!(tree.recorded_cwd(), Some(tree.scavenger_dir.clone()));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Strategy: sniper"), "stdout:\n{stdout}");
    assert!(stdout.contains("Binary found at"), "stdout:\n{stdout}");
    Ok(())
}

#[test]
fn child_exit_code_is_forwarded() -> Result<()> {
    for code in [0, 1, 7] {
        let tree = InstallTree::new(&["arb"])?;
        tree.install_fake_binary(&format!("exit {code}"))?;

        let output = tree.command(&[]).output()?;

        assert_eq!(output.status.code(), Some(code), "output: {output:?}");
        if code != 0 {
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(
                stderr.contains(&format!("Error: Process exited with code {code}")),
                "stderr:\n{stderr}"
            );
        }
    }
    Ok(())
}

#[test]
fn missing_config_exits_before_launching() -> Result<()> {
    let tree = InstallTree::new(&["arb", "sniper"])?;
    tree.install_fake_binary("exit 0")?;

    let output = tree.command(&["--strategy", "grid"]).output()?;

    assert_eq!(output.status.code(), Some(66), "output: {output:?}");
    assert!(tree.recorded_args().is_none(), "child must not run");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(&format!(
            "Error: Config file not found at {}",
            tree.config_path("grid").display()
        )),
        "stderr:\n{stderr}"
    );
    assert!(
        stderr.contains("available strategies: arb, sniper"),
        "stderr:\n{stderr}"
    );
    Ok(())
}

#[test]
fn default_strategy_is_arb() -> Result<()> {
    let tree = InstallTree::new(&["arb"])?;
    tree.install_fake_binary("exit 0")?;

    let output = tree.command(&[]).output()?;

    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    let args = tree.recorded_args().expect("child should record args");
    assert_eq!(args[1], "arb");
    assert_eq!(args[3], tree.config_path("arb").display().to_string());
    Ok(())
}

#[test]
fn launch_is_independent_of_caller_cwd() -> Result<()> {
    let tree = InstallTree::new(&["arb"])?;
    tree.install_fake_binary("exit 0")?;

    let output = tree
        .command(&[])
        .current_dir(tree.install_dir.join("configs"))
        .output()?;

    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    assert_eq!(tree.recorded_cwd(), Some(tree.scavenger_dir.clone()));
    Ok(())
}
