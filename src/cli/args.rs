use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "webrecon", version, about = "Web Security Recon Tool")]
pub struct Cli {
    /// Target domain (e.g. example.com)
    #[arg(short = 'd', long = "domain")]
    pub domain: String,

    /// Output directory [default: web_recon]
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of threads handed to each tool [default: 10]
    #[arg(short = 't', long = "threads", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,

    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Abort before running anything if a tool is missing
    #[arg(long = "require-tools", action = ArgAction::SetTrue)]
    pub require_tools: bool,

    /// Verbose logs
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Debug logs (implies verbose)
    #[arg(long = "debug", action = ArgAction::SetTrue)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_domain_is_required() {
        assert!(Cli::try_parse_from(["webrecon"]).is_err());
    }

    #[test]
    fn test_defaults_are_left_to_config() {
        let cli = Cli::try_parse_from(["webrecon", "-d", "example.com"]).unwrap();
        assert_eq!(cli.domain, "example.com");
        assert_eq!(cli.output, None);
        assert_eq!(cli.threads, None);
        assert!(!cli.require_tools);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "webrecon",
            "--domain",
            "example.com",
            "-o",
            "out",
            "-t",
            "50",
            "--config",
            "recon.yaml",
            "--require-tools",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.threads, Some(50));
        assert_eq!(cli.config, Some(PathBuf::from("recon.yaml")));
        assert!(cli.require_tools);
        assert!(cli.debug);
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(Cli::try_parse_from(["webrecon", "-d", "example.com", "-t", "0"]).is_err());
    }
}
