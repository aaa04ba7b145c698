use super::types::ReconConfig;
use crate::core::models::{Tool, ToolSettings};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATHS: &[&str] = &["./webrecon.yaml", "./config/webrecon.yaml"];
const CONFIG_FILE_NAME: &str = "webrecon.yaml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with a custom path.
    ///
    /// An explicit path must exist and parse. Otherwise the first default
    /// location that exists is used, falling back to built-in defaults.
    pub fn load_with_custom_path(custom_path: Option<&Path>) -> Result<ReconConfig> {
        if let Some(path) = custom_path {
            return Self::load_from_file(path)
                .with_context(|| format!("Failed to load config from {:?}", path));
        }

        for path in Self::candidate_paths() {
            if path.exists() {
                tracing::info!("Loading configuration from: {:?}", path);
                return Self::load_from_file(&path);
            }
        }

        tracing::info!("No configuration file found, using default settings");
        Ok(ReconConfig::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).collect();
        if let Some(dirs) = ProjectDirs::from("", "", "webrecon") {
            paths.push(dirs.config_dir().join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<ReconConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::load_from_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn load_from_str(content: &str) -> Result<ReconConfig> {
        // An empty file deserializes to null
        if content.trim().is_empty() {
            return Ok(ReconConfig::default());
        }
        let config: ReconConfig =
            serde_yaml::from_str(content).context("Failed to parse config YAML")?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    fn validate_config(config: &ReconConfig) -> Result<()> {
        if config.defaults.threads == 0 {
            anyhow::bail!("defaults.threads must be greater than 0");
        }

        if config.defaults.output_dir.trim().is_empty() {
            anyhow::bail!("defaults.output_dir cannot be empty");
        }

        if config.defaults.timeout_secs == Some(0) {
            anyhow::bail!("defaults.timeout_secs must be greater than 0 when set");
        }

        for (name, tool) in &config.tools {
            if Tool::from_name(name).is_none() {
                let known: Vec<&str> = Tool::ALL.iter().map(|t| t.name()).collect();
                anyhow::bail!("Unknown tool '{}'. Known tools: {}", name, known.join(", "));
            }
            if matches!(&tool.command, Some(command) if command.trim().is_empty()) {
                anyhow::bail!("{} command cannot be empty", name);
            }
        }

        Ok(())
    }

    /// Per-tool settings with overrides applied.
    pub fn tool_settings(config: &ReconConfig) -> HashMap<Tool, ToolSettings> {
        Tool::ALL
            .into_iter()
            .map(|tool| {
                let mut settings = ToolSettings::for_tool(tool);
                if let Some(custom) = config.tools.get(tool.name()) {
                    if let Some(command) = &custom.command {
                        settings.command = command.clone();
                    }
                    settings.extra_args = custom.extra_args.clone();
                }
                (tool, settings)
            })
            .collect()
    }
}
