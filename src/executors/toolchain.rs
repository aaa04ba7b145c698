use crate::core::models::{Tool, ToolSettings};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ToolStatus {
    pub tool: Tool,
    pub available: bool,
    pub path: Option<PathBuf>,
    pub install_suggestion: Option<String>,
}

pub fn install_suggestion(tool: Tool) -> &'static str {
    match tool {
        Tool::Subfinder => {
            "go install -v github.com/projectdiscovery/subfinder/v2/cmd/subfinder@latest"
        }
        Tool::Httpx => "go install -v github.com/projectdiscovery/httpx/cmd/httpx@latest",
        Tool::Waybackurls => "go install github.com/tomnomnom/waybackurls@latest",
        Tool::Nuclei => "go install -v github.com/projectdiscovery/nuclei/v3/cmd/nuclei@latest",
        Tool::Katana => "go install github.com/projectdiscovery/katana/cmd/katana@latest",
        Tool::Gau => "go install github.com/lc/gau/v2/cmd/gau@latest",
        Tool::Ffuf => "go install github.com/ffuf/ffuf/v2@latest",
        Tool::Subjack => "go install github.com/haccer/subjack@latest",
    }
}

/// Resolve every tool's configured program on `PATH`.
pub fn check_dependencies(tools: &HashMap<Tool, ToolSettings>) -> Vec<ToolStatus> {
    check_dependencies_in(tools, std::env::var_os("PATH"))
}

/// Same as [`check_dependencies`] against an explicit search path.
pub fn check_dependencies_in(
    tools: &HashMap<Tool, ToolSettings>,
    search_path: Option<OsString>,
) -> Vec<ToolStatus> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    Tool::ALL
        .into_iter()
        .map(|tool| {
            let settings = tools
                .get(&tool)
                .cloned()
                .unwrap_or_else(|| ToolSettings::for_tool(tool));
            // A lookup failure of any kind just means the tool is unavailable
            let path = which::which_in(&settings.command, search_path.clone(), &cwd).ok();
            match &path {
                Some(found) => tracing::debug!("Found {}: {:?}", tool, found),
                None => tracing::debug!("{} not found as {:?}", tool, settings.command),
            }
            ToolStatus {
                tool,
                available: path.is_some(),
                install_suggestion: path
                    .is_none()
                    .then(|| install_suggestion(tool).to_string()),
                path,
            }
        })
        .collect()
}

pub fn missing(statuses: &[ToolStatus]) -> Vec<Tool> {
    statuses
        .iter()
        .filter(|status| !status.available)
        .map(|status| status.tool)
        .collect()
}
