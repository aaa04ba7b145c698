use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `content` to a sibling temp file, fsync it and rename it into place,
/// so readers never observe a half-written artifact.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Invalid path: no parent directory"))?;

    if !parent.as_os_str().is_empty() && !parent.exists() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create parent directory: {:?}", parent))?;
    }

    let tmp_path = temp_sibling(path);

    let mut file = fs::File::create(&tmp_path)
        .with_context(|| format!("Failed to create temp file: {:?}", tmp_path))?;

    file.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {:?}", tmp_path))?;

    file.sync_all()
        .with_context(|| format!("Failed to sync temp file: {:?}", tmp_path))?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to rename {:?} to {:?}", tmp_path, path))?;

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("js_files.txt");
        fs::write(&path, "old\n").unwrap();

        atomic_write(&path, b"new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_atomic_write_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("common_dirs.txt");

        atomic_write(&path, b"admin\n").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_temp_sibling_keeps_extension_unique() {
        assert_eq!(
            temp_sibling(Path::new("out/ffuf_results.json")),
            PathBuf::from("out/.ffuf_results.json.tmp")
        );
    }
}
