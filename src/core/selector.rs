use crate::utils::error::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Produces the list of candidate documents under `root`.
///
/// A file root yields at most itself; a directory root is walked
/// recursively with no depth limit. Both fatal conditions live here:
/// a root that does not exist and a selection that filters down to
/// nothing.
pub fn select(
    root: &Path,
    include_suffixes: &[String],
    exclude_prefixes: &[String],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    if root.is_file() {
        files.push(root.to_path_buf());
    } else if root.is_dir() {
        walk(root, &mut files);
    } else {
        return Err(AuditError::TargetNotFound {
            path: root.to_path_buf(),
        });
    }

    files.retain(|f| allow_file(f, include_suffixes, exclude_prefixes));

    if files.is_empty() {
        return Err(AuditError::NoMatchingFiles {
            path: root.to_path_buf(),
        });
    }

    Ok(files)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    // An unreadable subdirectory is a per-entry condition, not a
    // run-level one: warn and keep scanning the rest of the tree.
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("unable to read directory \"{}\" | {}", dir.display(), e);
            return;
        }
    };

    let mut entries: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();

    // read_dir order is platform-defined; sort each level so selection
    // order is stable for a given tree.
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk(&path, out);
        } else {
            out.push(path);
        }
    }
}

/// Filename must end with one of the allowed suffixes and must not start
/// with an excluded prefix (hidden files, `~$`-style editor locks).
fn allow_file(path: &Path, include_suffixes: &[String], exclude_prefixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    include_suffixes.iter().any(|s| name.ends_with(s.as_str()))
        && exclude_prefixes.iter().all(|p| !name.starts_with(p.as_str()))
}
