use super::invocations;
use crate::core::errors::ReconError;
use crate::core::models::{Artifact, RunContext};
use crate::executors::runners::ToolRunner;
use crate::utils::fs::atomic_write;
use serde::Deserialize;
use std::io::{BufRead, BufReader};
use std::path::Path;
use url::Url;

pub const COMMON_DIRS: &[&str] = &[
    "admin",
    "api",
    "login",
    "uploads",
    "img",
    "js",
    "css",
    "config",
    ".git",
    ".env",
    "dashboard",
    "assets",
];

pub const FUZZ_KEYWORD: &str = "FUZZ";

#[derive(Debug, Deserialize)]
struct FfufReport {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

pub fn wordlist_content() -> String {
    let mut content = String::new();
    for dir in COMMON_DIRS {
        content.push_str(dir);
        content.push('\n');
    }
    content
}

/// `https://example.com [200] [Title]` becomes `https://example.com/FUZZ`.
/// Path, query and anything after the first whitespace are dropped.
pub fn fuzz_target(alive_line: &str) -> Result<String, ReconError> {
    let raw = alive_line.split_whitespace().next().unwrap_or_default();
    let url = Url::parse(raw).map_err(|e| ReconError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    let host = url.host_str().ok_or_else(|| ReconError::InvalidUrl {
        url: raw.to_string(),
        reason: "missing host".to_string(),
    })?;

    let authority = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    Ok(format!("{}://{}/{}", url.scheme(), authority, FUZZ_KEYWORD))
}

/// First line of `path`, decoded lossily and trimmed. Only that line is decoded.
fn first_line(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(std::fs::File::open(path)?);
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}

pub fn count_results(content: &str, path: &Path) -> Result<usize, ReconError> {
    let report: FfufReport =
        serde_json::from_str(content).map_err(|source| ReconError::MalformedResults {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(report.results.len())
}

/// Fuzz the first alive host with the built-in wordlist.
/// Returns the number of paths ffuf reported.
pub async fn run(ctx: &RunContext, runner: &dyn ToolRunner) -> Result<usize, ReconError> {
    let wordlist = ctx.artifact(Artifact::Wordlist);
    atomic_write(&wordlist, wordlist_content().as_bytes()).map_err(ReconError::Write)?;

    let alive = ctx.artifact(Artifact::Alive);
    let first = first_line(&alive)?;
    if first.is_empty() {
        return Err(ReconError::NoUrl(alive));
    }

    let target = fuzz_target(&first)?;
    tracing::info!("Brute-forcing {}", target);
    runner.run(&invocations::ffuf(ctx, &target)).await?;

    let results = ctx.artifact(Artifact::Ffuf);
    if !results.exists() {
        return Err(ReconError::MissingOutput(results));
    }
    let report = std::fs::read_to_string(&results)?;
    count_results(&report, &results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::core::models::{Target, Workspace};
    use crate::executors::runners::Invocation;
    use async_trait::async_trait;
    use rstest::rstest;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Records the ffuf target and writes an empty report.
    struct EmptyFfuf {
        targets: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ToolRunner for EmptyFfuf {
        async fn run(&self, invocation: &Invocation) -> Result<(), ReconError> {
            self.targets.lock().unwrap().push(invocation.args[1].clone());
            let out = invocation
                .args
                .iter()
                .position(|arg| arg == "-o")
                .map(|i| invocation.args[i + 1].clone())
                .unwrap();
            std::fs::write(out, r#"{"results":[]}"#)?;
            Ok(())
        }
    }

    #[test]
    fn test_first_line_ignores_invalid_bytes_further_down() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alive.txt");
        std::fs::write(
            &path,
            b"https://example.com [200]\r\nhttps://b.example.com [\xff\xfe]\n",
        )
        .unwrap();
        assert_eq!(first_line(&path).unwrap(), "https://example.com [200]");

        std::fs::write(&path, b"").unwrap();
        assert_eq!(first_line(&path).unwrap(), "");
    }

    #[tokio::test]
    async fn test_run_fuzzes_first_host_despite_non_utf8_lines() {
        let dir = tempdir().unwrap();
        let ctx = RunContext::new(
            Target::new("example.com").unwrap(),
            Workspace::new(dir.path()),
            10,
        );
        std::fs::write(
            ctx.artifact(Artifact::Alive),
            b"https://a.example.com [200] [Caf\xe9]\nhttps://b.example.com [\xff]\n",
        )
        .unwrap();
        let runner = EmptyFfuf {
            targets: Mutex::new(Vec::new()),
        };

        assert_eq!(run(&ctx, &runner).await.unwrap(), 0);
        assert_eq!(
            *runner.targets.lock().unwrap(),
            vec!["https://a.example.com/FUZZ".to_string()]
        );
    }

    #[test]
    fn test_wordlist_is_stable() {
        assert_eq!(
            wordlist_content(),
            "admin\napi\nlogin\nuploads\nimg\njs\ncss\nconfig\n.git\n.env\ndashboard\nassets\n"
        );
    }

    #[rstest]
    #[case("https://example.com [200] Title", "https://example.com/FUZZ")]
    #[case("https://example.com/login?next=/ [302]", "https://example.com/FUZZ")]
    #[case("http://api.example.com:8080 [200] [nginx]", "http://api.example.com:8080/FUZZ")]
    #[case("https://example.com:443", "https://example.com/FUZZ")]
    #[case("  https://Example.COM/  ", "https://example.com/FUZZ")]
    fn test_fuzz_target(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(fuzz_target(line).unwrap(), expected);
    }

    #[rstest]
    #[case("example.com [200]")]
    #[case("not a url")]
    #[case("mailto:someone@example.com")]
    fn test_fuzz_target_rejects(#[case] line: &str) {
        assert!(matches!(
            fuzz_target(line),
            Err(ReconError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_count_results() {
        let path = Path::new("ffuf_results.json");
        let report = r#"{"commandline":"ffuf","results":[{"url":"https://example.com/admin","status":301},{"url":"https://example.com/.git","status":403}]}"#;
        assert_eq!(count_results(report, path).unwrap(), 2);
        assert_eq!(count_results(r#"{"time":"now"}"#, path).unwrap(), 0);
        assert!(matches!(
            count_results("{not json", path),
            Err(ReconError::MalformedResults { .. })
        ));
    }
}
