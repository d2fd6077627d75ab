//! Production process control: enumeration/kill, detached spawn, captured run.

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use sysinfo::System;
use tokio::io::AsyncReadExt;

use crate::application::ports::{CaptureRunner, DaemonSpawner, ProcessHarvester};

/// Default timeout for captured controller runs (`version`, `status`).
pub const DEFAULT_CAPTURE_TIMEOUT: Duration = Duration::from_secs(30);

/// Production implementation of the process-control ports.
pub struct SystemProcesses {
    capture_timeout: Duration,
}

impl SystemProcesses {
    #[must_use]
    pub fn new(capture_timeout: Duration) -> Self {
        Self { capture_timeout }
    }
}

impl Default for SystemProcesses {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTURE_TIMEOUT)
    }
}

impl ProcessHarvester for SystemProcesses {
    fn kill_rooted_under(&self, dir: &Path) -> usize {
        let system = System::new_all();
        let mut killed = 0;
        for process in system.processes().values() {
            let Some(exe) = process.exe() else { continue };
            if exe.starts_with(dir) && process.kill() {
                killed += 1;
            }
        }
        killed
    }
}

impl DaemonSpawner for SystemProcesses {
    fn spawn_daemon(&self, program: &Path, args: &[&str]) -> Result<u32> {
        let child = std::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;
        Ok(child.id())
    }
}

impl CaptureRunner for SystemProcesses {
    /// Captured run with a guaranteed kill on timeout.
    ///
    /// On Windows, `tokio::time::timeout` around `.output().await` does NOT
    /// kill the child when the timeout fires — the future is dropped but the
    /// OS process keeps running. `tokio::select!` with an explicit
    /// `child.kill()` guarantees termination.
    async fn run_capture(&self, program: &Path, args: &[&str]) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {}", program.display()))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                Ok(Output {
                    status: status
                        .with_context(|| format!("waiting for {}", program.display()))?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(self.capture_timeout) => {
                let _ = child.kill().await;
                anyhow::bail!(
                    "{} timed out after {}s",
                    program.display(),
                    self.capture_timeout.as_secs()
                )
            }
        }
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
