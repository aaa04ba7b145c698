use crate::{
    cli::args::Cli,
    config::{ConfigLoader, ReconConfig},
    core::{
        models::{RunContext, Target},
        scheduler,
    },
    executors::{
        runners::ProcessRunner,
        toolchain,
    },
    organizers::layout,
    ui::printer,
    utils::logging,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings after layering CLI flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub output_dir: PathBuf,
    pub threads: usize,
    pub timeout_secs: Option<u64>,
}

impl RunSettings {
    pub fn resolve(cli: &Cli, config: &ReconConfig) -> Self {
        Self {
            output_dir: cli
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.defaults.output_dir)),
            threads: cli
                .threads
                .map(|t| t as usize)
                .unwrap_or(config.defaults.threads),
            timeout_secs: config.defaults.timeout_secs,
        }
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let level = logging::level_from_cli(&cli);
    logging::init(level)?;

    let config = ConfigLoader::load_with_custom_path(cli.config.as_deref())?;
    let settings = RunSettings::resolve(&cli, &config);
    let target = Target::new(&cli.domain)?;
    tracing::info!(
        "Starting recon for {} ({} threads, output {:?})",
        target.domain,
        settings.threads,
        settings.output_dir
    );

    printer::print_banner();

    let tools = ConfigLoader::tool_settings(&config);
    let statuses = toolchain::check_dependencies(&tools);
    let all_present = printer::print_dependency_report(&statuses);
    if !all_present {
        let missing: Vec<String> = toolchain::missing(&statuses)
            .iter()
            .map(|tool| tool.to_string())
            .collect();
        if cli.require_tools {
            anyhow::bail!("Missing required tools: {}", missing.join(", "));
        }
        tracing::warn!(
            "Continuing without {}; dependent steps will fail",
            missing.join(", ")
        );
    }

    let workspace = layout::prepare_workspace(&settings.output_dir)?;
    let ctx = RunContext::new(target, workspace, settings.threads).with_tools(tools);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let runner = ProcessRunner::new(cwd, settings.timeout_secs);

    let state = scheduler::execute_all(&ctx, &runner).await;
    tracing::debug!("Run state: {:?}", state);

    printer::print_completion(ctx.workspace.root());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_overrides_config() {
        let mut config = ReconConfig::default();
        config.defaults.threads = 40;
        config.defaults.output_dir = "from_config".to_string();
        config.defaults.timeout_secs = Some(60);

        let cli = Cli::parse_from(["webrecon", "-d", "example.com", "-t", "5"]);
        let settings = RunSettings::resolve(&cli, &config);

        assert_eq!(
            settings,
            RunSettings {
                output_dir: PathBuf::from("from_config"),
                threads: 5,
                timeout_secs: Some(60),
            }
        );
    }

    #[test]
    fn test_builtin_defaults() {
        let cli = Cli::parse_from(["webrecon", "-d", "example.com"]);
        let settings = RunSettings::resolve(&cli, &ReconConfig::default());
        assert_eq!(settings.output_dir, PathBuf::from("web_recon"));
        assert_eq!(settings.threads, 10);
        assert_eq!(settings.timeout_secs, None);
    }
}
