use crate::core::errors::ReconError;
use crate::core::models::{Artifact, RunContext};
use crate::utils::fs::atomic_write;
use std::collections::BTreeSet;
use std::path::Path;

const JS_MARKERS: &[&str] = &[".js", "/js/"];

pub fn is_js_line(line: &str) -> bool {
    JS_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Collect JavaScript URLs from each source into a sorted set.
/// Sources that do not exist are skipped.
pub fn collect_js_urls(sources: &[&Path]) -> Result<BTreeSet<String>, ReconError> {
    let mut urls = BTreeSet::new();

    for source in sources {
        if !source.exists() {
            tracing::debug!("Skipping missing JS source {:?}", source);
            continue;
        }
        let bytes = std::fs::read(source)?;
        let content = String::from_utf8_lossy(&bytes);
        urls.extend(
            content
                .lines()
                .filter(|line| is_js_line(line))
                .map(|line| line.trim().to_string()),
        );
    }

    Ok(urls)
}

/// Crawl output and archive URLs filtered into `js_files.txt`.
/// Returns how many distinct URLs were written.
pub fn run(ctx: &RunContext) -> Result<usize, ReconError> {
    let crawl = ctx.artifact(Artifact::Crawl);
    let wayback = ctx.artifact(Artifact::Wayback);
    let urls = collect_js_urls(&[crawl.as_path(), wayback.as_path()])?;

    if urls.is_empty() {
        return Err(ReconError::NoJsFiles);
    }

    let mut content = String::new();
    for url in &urls {
        content.push_str(url);
        content.push('\n');
    }
    atomic_write(ctx.artifact(Artifact::JsFiles), content.as_bytes()).map_err(ReconError::Write)?;

    Ok(urls.len())
}
