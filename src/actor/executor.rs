//! Actor process execution.
//!
//! An actor group names one external pipeline; the executor spawns the
//! configured runner program with the group as its argument, feeds the
//! encoded input document to the child's stdin, and captures stdout,
//! stderr, and the exit status. Invocations are bounded by a deadline so a
//! hung actor is killed instead of wedging the request task.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::time::{timeout, Duration};

use crate::config::DaemonConfig;

/// Captured signals of one finished actor invocation.
///
/// `stdout` is expected to hold a JSON document on success; `stderr` is
/// diagnostic text. A child killed by a signal reports exit code `-1`.
#[derive(Clone, Debug)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("failed to spawn actor runner: {0}")]
    Spawn(String),
    #[error("actor I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("actor group '{0}' exceeded its execution deadline")]
    Timeout(String),
}

/// Runs one actor group to completion with the given input document.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, group: &str, input: &str) -> Result<ExecutionResult, ExecutorError>;
}

/// Default executor: spawns the actor-runner program as a child process.
pub struct ProcessExecutor {
    runner: PathBuf,
    deadline: Duration,
    max_output_bytes: usize,
}

impl ProcessExecutor {
    pub fn new(runner: impl Into<PathBuf>, deadline: Duration, max_output_bytes: usize) -> Self {
        Self {
            runner: runner.into(),
            deadline,
            max_output_bytes,
        }
    }

    pub fn from_config(config: &DaemonConfig) -> Self {
        Self::new(
            config.runner.clone(),
            config.actor_timeout,
            config.max_output_bytes,
        )
    }
}

#[async_trait]
impl Executor for ProcessExecutor {
    async fn execute(&self, group: &str, input: &str) -> Result<ExecutionResult, ExecutorError> {
        let mut command = tokio::process::Command::new(&self.runner);
        command.arg(group);
        command.stdin(Stdio::piped());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command.kill_on_drop(true);

        let mut child = command
            .spawn()
            .map_err(|e| ExecutorError::Spawn(format!("{}: {e}", self.runner.display())))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).await?;
            // dropped here so the actor sees EOF on its input channel
        }

        let output = timeout(self.deadline, child.wait_with_output())
            .await
            .map_err(|_| ExecutorError::Timeout(group.to_string()))??;

        Ok(ExecutionResult {
            stdout: truncate_to_limit(&output.stdout, self.max_output_bytes),
            stderr: truncate_to_limit(&output.stderr, self.max_output_bytes),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

fn truncate_to_limit(bytes: &[u8], max_output_bytes: usize) -> String {
    let limit = bytes.len().min(max_output_bytes);
    String::from_utf8_lossy(&bytes[..limit]).into_owned()
}
