//! Command execution boundary: run a shell command, get its trimmed stdout back.
//! Failures never propagate; they come back as the `UNAVAILABLE` sentinel.

use std::collections::HashMap;
use std::process::Stdio;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::trace;

/// Returned in place of output when a command could not produce any.
pub const UNAVAILABLE: &str = "N/A";

pub trait CommandRunner: Send + Sync {
    fn run<'a>(&'a self, command: &'a str) -> BoxFuture<'a, String>;
}

/// True when `text` carries no usable command output.
pub fn is_unavailable(text: &str) -> bool {
    let t = text.trim();
    t.is_empty() || t == UNAVAILABLE
}

/// Runs commands through `sh -c` with a per-call deadline.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn exec(&self, command: &str) -> String {
        let child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        match timeout(self.timeout, child).await {
            Ok(Ok(out)) if out.status.success() => {
                String::from_utf8_lossy(&out.stdout).trim().to_string()
            }
            Ok(Ok(out)) => {
                trace!(command, status = ?out.status, "command exited non-zero");
                UNAVAILABLE.to_string()
            }
            Ok(Err(e)) => {
                trace!(command, error = %e, "command failed to spawn");
                UNAVAILABLE.to_string()
            }
            Err(_) => {
                trace!(command, timeout_ms = self.timeout.as_millis() as u64, "command timed out");
                UNAVAILABLE.to_string()
            }
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl CommandRunner for ShellRunner {
    fn run<'a>(&'a self, command: &'a str) -> BoxFuture<'a, String> {
        self.exec(command).boxed()
    }
}

/// Canned command -> output table. Commands it doesn't know come back unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticRunner {
    outputs: HashMap<String, String>,
}

impl StaticRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.insert(command, output);
        self
    }

    pub fn insert(&mut self, command: impl Into<String>, output: impl Into<String>) {
        self.outputs.insert(command.into(), output.into());
    }
}

impl CommandRunner for StaticRunner {
    fn run<'a>(&'a self, command: &'a str) -> BoxFuture<'a, String> {
        let out = self
            .outputs
            .get(command)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string());
        async move { out }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn shell_runner_trims_stdout() {
        let r = ShellRunner::default();
        assert_eq!(r.run("printf '  hello \\n'").await, "hello");
    }

    #[tokio::test]
    async fn shell_runner_maps_failures_to_sentinel() {
        let r = ShellRunner::default();
        assert_eq!(r.run("exit 3").await, UNAVAILABLE);
        assert_eq!(r.run("definitely-not-a-real-binary-xyz").await, UNAVAILABLE);
    }

    #[tokio::test]
    async fn shell_runner_discards_stderr() {
        let r = ShellRunner::default();
        assert_eq!(r.run("echo out; echo err 1>&2").await, "out");
    }

    #[tokio::test]
    async fn shell_runner_enforces_timeout() {
        let r = ShellRunner::new(Duration::from_millis(100));
        assert_eq!(r.run("sleep 5").await, UNAVAILABLE);
    }

    #[tokio::test]
    async fn static_runner_unknown_command_is_unavailable() {
        let r = StaticRunner::new().with("hostname", "box\n");
        assert_eq!(r.run("hostname").await, "box");
        assert!(is_unavailable(&r.run("uptime").await));
    }
}
