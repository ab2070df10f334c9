use std::{
    io::Read,
    process::Stdio,
    thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Result};

use crate::common::InstallTree;

const WAIT_LIMIT: Duration = Duration::from_secs(10);

#[test]
fn sigint_to_launcher_is_a_clean_stop() -> Result<()> {
    let tree = InstallTree::new(&["arb"])?;
    let started = tree.marker("started");
    tree.install_fake_binary(&format!(
        "touch '{}'\nexec sleep 30",
        started.display()
    ))?;

    let mut child = tree
        .command(&[])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let deadline = Instant::now() + WAIT_LIMIT;
    while !started.exists() {
        if Instant::now() > deadline {
            let _ = child.kill();
            bail!("fake scavenger never started");
        }
        thread::sleep(Duration::from_millis(20));
    }

    let pid = i32::try_from(child.id())?;
    // SAFETY: plain kill(2) on a child we own.
    let rc = unsafe { libc::kill(pid, libc::SIGINT) };
    assert_eq!(rc, 0, "kill should deliver SIGINT");

    let deadline = Instant::now() + WAIT_LIMIT;
    let status = loop {
        if let Some(status) = child.try_wait()? {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            bail!("launcher did not stop after SIGINT");
        }
        thread::sleep(Duration::from_millis(20));
    };

    assert_eq!(status.code(), Some(0), "interrupt must not look like a crash");
    let mut stdout = String::new();
    if let Some(mut pipe) = child.stdout.take() {
        pipe.read_to_string(&mut stdout)?;
    }
    assert!(stdout.contains("Stopping..."), "stdout:\n{stdout}");
    Ok(())
}
