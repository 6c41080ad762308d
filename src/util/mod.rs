//! Path helpers shared by the sync engine

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::types::SyncError;

/// Render a path with forward slashes for display output.
pub fn display_path(path: &Path) -> String {
    let text = path.display().to_string();
    if cfg!(windows) {
        text.replace('\\', "/")
    } else {
        text
    }
}

/// Make sure the parent directory of `path` exists.
///
/// Under dry-run the would-be creation is reported on `out` and nothing is
/// touched. In real mode directories are created recursively; a parent that
/// already exists is success, only genuine creation failures are errors.
pub fn ensure_parent_dir(
    path: &Path,
    dry_run: bool,
    out: &mut dyn Write,
) -> Result<(), SyncError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    if dry_run {
        writeln!(
            out,
            "[DRY RUN] Would create directory: {}",
            display_path(parent)
        )?;
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| SyncError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// Produce the forward-slash relative path of `path` under `base`.
///
/// Falls back to canonicalizing both sides when the raw strip fails (mixed
/// absolute and relative inputs), and finally to the file's base name when
/// the two paths share no resolvable relationship.
pub fn relative_posix(base: &Path, path: &Path) -> String {
    if let Ok(rel) = path.strip_prefix(base) {
        return slash_join(rel);
    }
    if let (Ok(canon_base), Ok(canon_path)) = (base.canonicalize(), path.canonicalize()) {
        if let Ok(rel) = canon_path.strip_prefix(&canon_base) {
            return slash_join(rel);
        }
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn slash_join(rel: &Path) -> String {
    rel.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
