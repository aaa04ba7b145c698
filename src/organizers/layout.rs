use crate::core::models::Workspace;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create the workspace (and any missing parents) and make sure it accepts writes.
/// Existing artifacts are left in place and get overwritten by the run.
pub fn prepare_workspace(root: &Path) -> Result<Workspace> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create workspace: {:?}", root))?;

    if !root.is_dir() {
        anyhow::bail!("Workspace is not a directory: {:?}", root);
    }

    verify_writable(root)?;
    tracing::info!("Workspace ready at {:?}", root);

    Ok(Workspace::new(root))
}

fn verify_writable(path: &Path) -> Result<()> {
    let test_file = path.join(".write_test");
    fs::write(&test_file, b"test")
        .with_context(|| format!("Directory not writable: {:?}", path))?;
    fs::remove_file(&test_file)
        .with_context(|| format!("Failed to remove test file: {:?}", test_file))?;
    Ok(())
}
