use super::command::execute;
use crate::core::errors::ReconError;
use crate::core::models::Tool;
use async_trait::async_trait;
use std::path::PathBuf;

/// A fully-built external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tool: Tool,
    pub program: String,
    pub args: Vec<String>,
    /// Redirect the child's stdout into this file instead of inheriting ours.
    pub stdout: Option<PathBuf>,
}

impl Invocation {
    pub fn command_line(&self) -> String {
        let mut words = vec![self.program.clone()];
        words.extend(self.args.iter().cloned());
        let line = shell_words::join(words);
        match &self.stdout {
            Some(path) => format!("{} > {}", line, path.display()),
            None => line,
        }
    }
}

/// Seam between the pipeline and the processes it launches.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<(), ReconError>;
}

/// Launches real processes from a fixed working directory.
pub struct ProcessRunner {
    cwd: PathBuf,
    timeout_ms: Option<u64>,
}

impl ProcessRunner {
    pub fn new(cwd: PathBuf, timeout_secs: Option<u64>) -> Self {
        Self {
            cwd,
            timeout_ms: timeout_secs.map(|secs| secs.saturating_mul(1000)),
        }
    }
}

#[async_trait]
impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<(), ReconError> {
        tracing::info!("Running {}", invocation.command_line());
        let result = execute(
            &invocation.program,
            &invocation.args,
            &self.cwd,
            invocation.stdout.as_deref(),
            self.timeout_ms,
        )
        .await
        .inspect_err(|err| {
            if let ReconError::Exec(exec) = err {
                tracing::warn!(
                    "{} {} in {} failed after {}ms",
                    exec.tool,
                    shell_words::join(&exec.args),
                    exec.cwd,
                    exec.duration_ms
                );
            }
        })?;
        tracing::debug!(
            "{} exited {} after {}ms",
            invocation.tool,
            result.exit_code,
            result.duration_ms
        );
        Ok(())
    }
}
