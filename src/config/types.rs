use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_OUTPUT_DIR: &str = "web_recon";
pub const DEFAULT_THREADS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReconConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Keyed by tool name, e.g. `nuclei`.
    #[serde(default)]
    pub tools: BTreeMap<String, ToolOverride>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Per-process limit; unset means tools may run forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            threads: default_threads(),
            timeout_secs: None,
        }
    }
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_threads() -> usize {
    DEFAULT_THREADS
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolOverride {
    pub command: Option<String>,
    #[serde(default)]
    pub extra_args: Vec<String>,
}
