use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// External binaries the pipeline drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    Subfinder,
    Httpx,
    Waybackurls,
    Gau,
    Katana,
    Nuclei,
    Subjack,
    Ffuf,
}

impl Tool {
    /// Order matches the dependency report.
    pub const ALL: [Tool; 8] = [
        Tool::Subfinder,
        Tool::Httpx,
        Tool::Waybackurls,
        Tool::Nuclei,
        Tool::Katana,
        Tool::Gau,
        Tool::Ffuf,
        Tool::Subjack,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Subfinder => "subfinder",
            Tool::Httpx => "httpx",
            Tool::Waybackurls => "waybackurls",
            Tool::Gau => "gau",
            Tool::Katana => "katana",
            Tool::Nuclei => "nuclei",
            Tool::Subjack => "subjack",
            Tool::Ffuf => "ffuf",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|tool| tool.name() == name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Files a run produces inside the workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Artifact {
    Subdomains,
    Alive,
    Wayback,
    Gau,
    Crawl,
    JsFiles,
    Nuclei,
    Takeover,
    Ffuf,
    Wordlist,
}

impl Artifact {
    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Subdomains => "subdomains.txt",
            Artifact::Alive => "alive.txt",
            Artifact::Wayback => "waybackurls.txt",
            Artifact::Gau => "gau_urls.txt",
            Artifact::Crawl => "katana_crawl.txt",
            Artifact::JsFiles => "js_files.txt",
            Artifact::Nuclei => "nuclei_results.json",
            Artifact::Takeover => "subdomain_takeover.txt",
            Artifact::Ffuf => "ffuf_results.json",
            Artifact::Wordlist => "common_dirs.txt",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.root.join(artifact.file_name())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[derive(Clone, Debug)]
pub struct Target {
    pub domain: String,
}

impl Target {
    pub fn new(domain: &str) -> anyhow::Result<Self> {
        let domain = domain.trim();
        if domain.is_empty() {
            anyhow::bail!("target domain cannot be empty");
        }
        Ok(Self {
            domain: domain.to_string(),
        })
    }
}

/// Program and extra arguments used when invoking a tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolSettings {
    pub command: String,
    pub extra_args: Vec<String>,
}

impl ToolSettings {
    pub fn for_tool(tool: Tool) -> Self {
        Self {
            command: tool.name().to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Everything a step needs to run, passed explicitly to each step.
#[derive(Clone, Debug)]
pub struct RunContext {
    pub target: Target,
    pub workspace: Workspace,
    pub threads: usize,
    pub tools: HashMap<Tool, ToolSettings>,
}

impl RunContext {
    pub fn new(target: Target, workspace: Workspace, threads: usize) -> Self {
        let tools = Tool::ALL
            .into_iter()
            .map(|tool| (tool, ToolSettings::for_tool(tool)))
            .collect();
        Self {
            target,
            workspace,
            threads,
            tools,
        }
    }

    pub fn with_tools(mut self, tools: HashMap<Tool, ToolSettings>) -> Self {
        self.tools.extend(tools);
        self
    }

    pub fn tool(&self, tool: Tool) -> ToolSettings {
        self.tools
            .get(&tool)
            .cloned()
            .unwrap_or_else(|| ToolSettings::for_tool(tool))
    }

    pub fn artifact(&self, artifact: Artifact) -> PathBuf {
        self.workspace.path(artifact)
    }
}
