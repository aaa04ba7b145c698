use crate::executors::toolchain::ToolStatus;
use colored::Colorize;
use std::path::Path;

const BANNER: &str = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                           Web Security Recon Tool                            ║
║                      Comprehensive Bug Hunting Suite                         ║
╚══════════════════════════════════════════════════════════════════════════════╝
"#;

pub fn print_banner() {
    println!("{}", BANNER.cyan().bold());
}

/// Prints one line per tool and the install hints of anything missing.
/// Returns whether every tool was found.
pub fn print_dependency_report(statuses: &[ToolStatus]) -> bool {
    println!("{}", "[+] Checking dependencies...".cyan().bold());

    for status in statuses {
        if status.available {
            let location = status
                .path
                .as_ref()
                .map(|path| format!("({})", path.display()))
                .unwrap_or_default();
            println!(
                "    {} {} is installed {}",
                "✓".green(),
                status.tool.to_string().green(),
                location.dimmed()
            );
        } else {
            println!(
                "    {} {} is missing",
                "✗".red(),
                status.tool.to_string().red().bold()
            );
        }
    }

    let missing: Vec<&ToolStatus> = statuses.iter().filter(|s| !s.available).collect();
    if missing.is_empty() {
        return true;
    }

    println!("\n{}", "[!] Missing tools:".yellow().bold());
    for status in missing {
        if let Some(suggestion) = &status.install_suggestion {
            println!("{}: {}", status.tool, suggestion.dimmed());
        }
    }
    false
}

pub fn print_step_heading(heading: &str) {
    println!("\n{}", heading.cyan().bold());
}

pub fn print_step_success(message: &str) {
    println!("    {} {}", "✓".green(), message);
}

pub fn print_step_failure(message: &str) {
    println!("    {} {}", "✗".red(), message.red());
}

pub fn skipped_line(step_name: &str) -> String {
    format!("[!] Step '{}' failed or was skipped.", step_name)
}

pub fn print_step_skipped(step_name: &str) {
    println!("{}", skipped_line(step_name).yellow());
}

pub fn completion_lines(workspace: &Path) -> [String; 2] {
    [
        "[✓] Web Security Recon Complete!".to_string(),
        format!("[+] All results saved in: {}", workspace.display()),
    ]
}

pub fn print_completion(workspace: &Path) {
    let [done, saved] = completion_lines(workspace);
    println!("\n{}", done.green().bold());
    println!("{}", saved.green());
}
