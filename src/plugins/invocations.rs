use crate::core::models::{Artifact, RunContext, Tool};
use crate::executors::runners::Invocation;
use std::path::Path;

pub const CRAWL_DEPTH: u32 = 3;
pub const NUCLEI_SEVERITIES: &str = "critical,high,medium";
pub const FFUF_MATCH_CODES: &str = "200,204,301,302,307,403";
pub const FFUF_FILTER_SIZE: &str = "0";

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}

/// Arguments for a tool whose command line depends only on the run context.
///
/// ffuf needs an alive URL and is only built through [`ffuf`], so it yields `None`.
pub fn build(tool: Tool, ctx: &RunContext) -> Option<Invocation> {
    let threads = ctx.threads.to_string();
    let domain = ctx.target.domain.clone();
    let mut stdout = None;

    let mut args: Vec<String> = match tool {
        Tool::Subfinder => vec![
            "-d".into(),
            domain,
            "-o".into(),
            path_arg(&ctx.artifact(Artifact::Subdomains)),
            "-all".into(),
            "-silent".into(),
        ],
        Tool::Httpx => vec![
            "-l".into(),
            path_arg(&ctx.artifact(Artifact::Subdomains)),
            "-o".into(),
            path_arg(&ctx.artifact(Artifact::Alive)),
            "-title".into(),
            "-tech-detect".into(),
            "-status-code".into(),
            "-content-length".into(),
            "-silent".into(),
            "-threads".into(),
            threads,
        ],
        Tool::Waybackurls => {
            stdout = Some(ctx.artifact(Artifact::Wayback));
            vec![domain]
        }
        Tool::Gau => vec![
            "--threads".into(),
            threads,
            "--o".into(),
            path_arg(&ctx.artifact(Artifact::Gau)),
            domain,
        ],
        Tool::Katana => vec![
            "-list".into(),
            path_arg(&ctx.artifact(Artifact::Alive)),
            "-o".into(),
            path_arg(&ctx.artifact(Artifact::Crawl)),
            "-d".into(),
            CRAWL_DEPTH.to_string(),
            "-c".into(),
            threads,
            "-silent".into(),
            "-js-crawl".into(),
        ],
        Tool::Nuclei => vec![
            "-l".into(),
            path_arg(&ctx.artifact(Artifact::Alive)),
            "-o".into(),
            path_arg(&ctx.artifact(Artifact::Nuclei)),
            "-json".into(),
            "-c".into(),
            threads,
            "-severity".into(),
            NUCLEI_SEVERITIES.into(),
            "-silent".into(),
        ],
        Tool::Subjack => vec![
            "-w".into(),
            path_arg(&ctx.artifact(Artifact::Subdomains)),
            "-o".into(),
            path_arg(&ctx.artifact(Artifact::Takeover)),
            "-ssl".into(),
            "-c".into(),
            threads,
        ],
        Tool::Ffuf => return None,
    };

    finish(tool, ctx, &mut args);
    Some(Invocation {
        tool,
        program: ctx.tool(tool).command,
        args,
        stdout,
    })
}

/// ffuf against `target_url`, which must already contain the `FUZZ` keyword.
pub fn ffuf(ctx: &RunContext, target_url: &str) -> Invocation {
    let mut args: Vec<String> = vec![
        "-u".into(),
        target_url.into(),
        "-w".into(),
        path_arg(&ctx.artifact(Artifact::Wordlist)),
        "-o".into(),
        path_arg(&ctx.artifact(Artifact::Ffuf)),
        "-of".into(),
        "json".into(),
        "-t".into(),
        ctx.threads.to_string(),
        "-mc".into(),
        FFUF_MATCH_CODES.into(),
        "-fs".into(),
        FFUF_FILTER_SIZE.into(),
    ];
    finish(Tool::Ffuf, ctx, &mut args);
    Invocation {
        tool: Tool::Ffuf,
        program: ctx.tool(Tool::Ffuf).command,
        args,
        stdout: None,
    }
}

fn finish(tool: Tool, ctx: &RunContext, args: &mut Vec<String>) {
    args.extend(ctx.tool(tool).extra_args);
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::models::{Target, ToolSettings, Workspace};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn ctx() -> RunContext {
        RunContext::new(
            Target::new("example.com").unwrap(),
            Workspace::new("out"),
            25,
        )
    }

    fn words(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_subfinder_args() {
        let inv = build(Tool::Subfinder, &ctx()).unwrap();
        assert_eq!(inv.program, "subfinder");
        assert_eq!(
            inv.args,
            words("-d example.com -o out/subdomains.txt -all -silent")
        );
        assert_eq!(inv.stdout, None);
    }

    #[test]
    fn test_httpx_passes_thread_count() {
        let inv = build(Tool::Httpx, &ctx()).unwrap();
        assert_eq!(
            inv.args,
            words(
                "-l out/subdomains.txt -o out/alive.txt -title -tech-detect \
                 -status-code -content-length -silent -threads 25"
            )
        );
    }

    #[test]
    fn test_waybackurls_redirects_stdout() {
        let inv = build(Tool::Waybackurls, &ctx()).unwrap();
        assert_eq!(inv.args, words("example.com"));
        assert_eq!(inv.stdout, Some(PathBuf::from("out/waybackurls.txt")));
    }

    #[test]
    fn test_gau_args() {
        let inv = build(Tool::Gau, &ctx()).unwrap();
        assert_eq!(
            inv.args,
            words("--threads 25 --o out/gau_urls.txt example.com")
        );
    }

    #[test]
    fn test_katana_crawls_to_fixed_depth() {
        let inv = build(Tool::Katana, &ctx()).unwrap();
        assert_eq!(
            inv.args,
            words("-list out/alive.txt -o out/katana_crawl.txt -d 3 -c 25 -silent -js-crawl")
        );
    }

    #[test]
    fn test_nuclei_filters_severity() {
        let inv = build(Tool::Nuclei, &ctx()).unwrap();
        assert_eq!(
            inv.args,
            words(
                "-l out/alive.txt -o out/nuclei_results.json -json -c 25 \
                 -severity critical,high,medium -silent"
            )
        );
    }

    #[test]
    fn test_subjack_reads_raw_subdomains() {
        let inv = build(Tool::Subjack, &ctx()).unwrap();
        assert_eq!(
            inv.args,
            words("-w out/subdomains.txt -o out/subdomain_takeover.txt -ssl -c 25")
        );
    }

    #[test]
    fn test_ffuf_args() {
        let inv = ffuf(&ctx(), "https://a.example.com/FUZZ");
        assert_eq!(
            inv.args,
            words(
                "-u https://a.example.com/FUZZ -w out/common_dirs.txt -o out/ffuf_results.json \
                 -of json -t 25 -mc 200,204,301,302,307,403 -fs 0"
            )
        );
    }

    #[test]
    fn test_ffuf_needs_a_target_url() {
        assert_eq!(build(Tool::Ffuf, &ctx()), None);
    }

    #[test]
    fn test_configured_command_and_extra_args() {
        let mut tools = HashMap::new();
        tools.insert(
            Tool::Nuclei,
            ToolSettings {
                command: "/opt/nuclei".to_string(),
                extra_args: words("-rl 50"),
            },
        );
        let inv = build(Tool::Nuclei, &ctx().with_tools(tools)).unwrap();
        assert_eq!(inv.program, "/opt/nuclei");
        assert_eq!(&inv.args[inv.args.len() - 2..], &words("-rl 50")[..]);
    }
}
