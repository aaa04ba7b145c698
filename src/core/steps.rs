use super::models::{Artifact, Tool};

/// What a step does once its precondition holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepAction {
    /// Run a tool whose arguments are fully known up front.
    External(Tool),
    /// Filter crawl and archive output down to JavaScript URLs.
    ExtractJs,
    /// Write the wordlist, derive a target from the alive list and run ffuf.
    Bruteforce,
}

#[derive(Clone, Copy, Debug)]
pub struct StepDescriptor {
    pub ordinal: usize,
    pub name: &'static str,
    /// `{target}` is replaced with the domain when printed.
    pub title: &'static str,
    pub precondition: Option<Artifact>,
    pub outputs: &'static [Artifact],
    pub action: StepAction,
    pub success: &'static str,
}

impl StepDescriptor {
    pub fn heading(&self, domain: &str) -> String {
        format!(
            "[{}/{}] {}",
            self.ordinal,
            STEPS.len(),
            self.title.replace("{target}", domain)
        )
    }

    pub fn tool(&self) -> Option<Tool> {
        match self.action {
            StepAction::External(tool) => Some(tool),
            StepAction::Bruteforce => Some(Tool::Ffuf),
            StepAction::ExtractJs => None,
        }
    }
}

pub static STEPS: [StepDescriptor; 9] = [
    StepDescriptor {
        ordinal: 1,
        name: "run_subfinder",
        title: "Running subfinder on {target}",
        precondition: None,
        outputs: &[Artifact::Subdomains],
        action: StepAction::External(Tool::Subfinder),
        success: "Subdomain enumeration complete",
    },
    StepDescriptor {
        ordinal: 2,
        name: "run_httpx",
        title: "Running httpx",
        precondition: Some(Artifact::Subdomains),
        outputs: &[Artifact::Alive],
        action: StepAction::External(Tool::Httpx),
        success: "Alive domains identified",
    },
    StepDescriptor {
        ordinal: 3,
        name: "run_waybackurls",
        title: "Running waybackurls",
        precondition: None,
        outputs: &[Artifact::Wayback],
        action: StepAction::External(Tool::Waybackurls),
        success: "Wayback URLs collected",
    },
    StepDescriptor {
        ordinal: 4,
        name: "run_gau",
        title: "Running gau",
        precondition: None,
        outputs: &[Artifact::Gau],
        action: StepAction::External(Tool::Gau),
        success: "gau URLs collected",
    },
    StepDescriptor {
        ordinal: 5,
        name: "run_katana_crawl",
        title: "Running katana",
        precondition: Some(Artifact::Alive),
        outputs: &[Artifact::Crawl],
        action: StepAction::External(Tool::Katana),
        success: "Katana crawl complete",
    },
    StepDescriptor {
        ordinal: 6,
        name: "extract_js_files",
        title: "Extracting JS files",
        precondition: None,
        outputs: &[Artifact::JsFiles],
        action: StepAction::ExtractJs,
        success: "Found {count} JavaScript files",
    },
    StepDescriptor {
        ordinal: 7,
        name: "run_nuclei_scan",
        title: "Running nuclei scan",
        precondition: Some(Artifact::Alive),
        outputs: &[Artifact::Nuclei],
        action: StepAction::External(Tool::Nuclei),
        success: "Nuclei scan complete",
    },
    StepDescriptor {
        ordinal: 8,
        name: "run_subdomain_takeover",
        title: "Checking for subdomain takeover",
        precondition: Some(Artifact::Subdomains),
        outputs: &[Artifact::Takeover],
        action: StepAction::External(Tool::Subjack),
        success: "Subdomain takeover check complete",
    },
    StepDescriptor {
        ordinal: 9,
        name: "run_directory_bruteforce",
        title: "Running ffuf directory bruteforce",
        precondition: Some(Artifact::Alive),
        outputs: &[Artifact::Wordlist, Artifact::Ffuf],
        action: StepAction::Bruteforce,
        success: "Found {count} valid paths",
    },
];
