use crate::core::errors::{ExecError, ReconError};
use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::time::timeout;

const STDERR_TAIL_LINES: usize = 10;

#[derive(Debug)]
pub struct CommandResult {
    pub exit_code: i32,
    pub duration_ms: u128,
}

/// Run `program` to completion.
///
/// When `stdout_file` is set the child's stdout is written straight into that
/// file (created or truncated); otherwise it goes to our own stdout. Stderr is
/// captured and decoded lossily, so tools printing non-UTF-8 bytes still run
/// to completion.
pub async fn execute(
    program: &str,
    args: &[String],
    cwd: &Path,
    stdout_file: Option<&Path>,
    timeout_ms: Option<u64>,
) -> Result<CommandResult, ReconError> {
    let start = Instant::now();

    tracing::debug!(
        "Executing: {} {} in {:?}",
        program,
        shell_words::join(args),
        cwd
    );

    let stdout = match stdout_file {
        Some(path) => Stdio::from(std::fs::File::create(path)?),
        None => Stdio::inherit(),
    };

    let mut cmd = Command::new(program);
    cmd.args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(stdout)
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = cmd.spawn().map_err(|source| ReconError::Launch {
        tool: program.to_string(),
        source,
    })?;

    let stderr_handle = child.stderr.take();

    // Drain stderr while waiting so a chatty tool never blocks on a full buffer
    let (stderr_result, wait_result) = tokio::join!(
        read_output(stderr_handle),
        async {
            match timeout_ms {
                Some(ms) => match timeout(Duration::from_millis(ms), child.wait()).await {
                    Ok(status) => Some(status),
                    Err(_) => {
                        // Killing closes stderr so the reader above can finish
                        let _ = child.kill().await;
                        None
                    }
                },
                None => Some(child.wait().await),
            }
        }
    );

    let duration_ms = start.elapsed().as_millis();

    let status = match wait_result {
        Some(Ok(status)) => status,
        Some(Err(e)) => {
            return Err(ReconError::Exec(ExecError {
                tool: program.to_string(),
                args: args.to_vec(),
                cwd: cwd.display().to_string(),
                exit_code: None,
                stderr_tail: format!("Process error: {}", e),
                duration_ms,
            }));
        }
        None => {
            return Err(ReconError::Timeout {
                tool: program.to_string(),
                timeout_ms: timeout_ms.unwrap_or_default(),
            });
        }
    };

    let exit_code = status.code().unwrap_or(-1);
    let stderr = stderr_result?;

    if !status.success() {
        return Err(ReconError::Exec(ExecError {
            tool: program.to_string(),
            args: args.to_vec(),
            cwd: cwd.display().to_string(),
            exit_code: status.code(),
            stderr_tail: tail(&stderr, STDERR_TAIL_LINES),
            duration_ms,
        }));
    }

    tracing::debug!("{} finished in {}ms", program, duration_ms);

    Ok(CommandResult {
        exit_code,
        duration_ms,
    })
}

async fn read_output<R>(handle: Option<R>) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let Some(mut handle) = handle else {
        return Ok(String::new());
    };

    let mut buf = Vec::new();
    handle.read_to_end(&mut buf).await?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn tail(text: &str, count: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let skip = lines.len().saturating_sub(count);
    lines[skip..].join("\n")
}
