//! Common file system operations with unified error handling

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::error::{Result, write_failed};

/// Directory entries never deployed to the kiosk.
const EXCLUDED_ENTRIES: &[&str] = &["__pycache__", ".git"];

/// Ensure a directory exists, creating parents as needed.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| write_failed(path, e))
}

/// Copy a directory recursively, skipping excluded entries.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        fs::create_dir_all(dst)?;
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let entry_path = entry.path();
        let file_name = entry.file_name();

        if EXCLUDED_ENTRIES
            .iter()
            .any(|excluded| file_name.to_str() == Some(excluded))
        {
            continue;
        }

        let dst_path = dst.join(&file_name);

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}

/// Set the executable bits (0o755) on a deployed script.
pub fn set_executable(path: &Path) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| write_failed(path, e))
}

/// Write a whole file, creating its parent directory first.
///
/// Used for every file the installer owns exclusively: content is always a
/// full overwrite, never a merge.
pub fn write_owned_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
    }
    fs::write(path, content).map_err(|e| write_failed(path, e))
}
