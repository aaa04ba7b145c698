use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct ExecError {
    pub tool: String,
    pub args: Vec<String>,
    pub cwd: String,
    pub exit_code: Option<i32>,
    pub stderr_tail: String,
    pub duration_ms: u128,
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "{} exited with status {}", self.tool, code)?,
            None => write!(f, "{} terminated by signal", self.tool)?,
        }
        if let Some(last) = self.stderr_tail.lines().rev().find(|l| !l.trim().is_empty()) {
            write!(f, ": {}", last.trim())?;
        }
        Ok(())
    }
}

/// Everything that can make a single pipeline step fail.
#[derive(Error, Debug)]
pub enum ReconError {
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Exec(ExecError),

    #[error("{tool} timed out after {timeout_ms}ms")]
    Timeout { tool: String, timeout_ms: u64 },

    #[error("{} not found", display_name(.0))]
    MissingInput(PathBuf),

    #[error("{} output not found", display_name(.0))]
    MissingOutput(PathBuf),

    #[error("No JS files found")]
    NoJsFiles,

    #[error("No URL in {}", display_name(.0))]
    NoUrl(PathBuf),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("malformed results in {}: {source}", .path.display())]
    MalformedResults {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0:#}")]
    Write(anyhow::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_names_file_only() {
        let err = ReconError::MissingInput(PathBuf::from("web_recon/subdomains.txt"));
        assert_eq!(err.to_string(), "subdomains.txt not found");
    }

    #[test]
    fn test_exec_error_uses_last_stderr_line() {
        let err = ReconError::Exec(ExecError {
            tool: "httpx".to_string(),
            args: vec![],
            cwd: ".".to_string(),
            exit_code: Some(2),
            stderr_tail: "starting\nflag provided but not defined: -bogus\n\n".to_string(),
            duration_ms: 4,
        });
        assert_eq!(
            err.to_string(),
            "httpx exited with status 2: flag provided but not defined: -bogus"
        );
    }
}
