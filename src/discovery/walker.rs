//! Recursive directory walk

use std::fs;
use std::path::{Path, PathBuf};

use super::DiscoveryError;

/// Collect every non-directory entry below `dir`, depth first.
///
/// Order within a directory is whatever `read_dir` yields, no sorting.
/// Any enumeration error is fatal; nothing is skipped or retried.
pub fn walk(dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();
    walk_into(dir, &mut files)?;
    Ok(files)
}

fn walk_into(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), DiscoveryError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoveryError::Walk {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_dir() {
            walk_into(&path, files)?;
        } else {
            files.push(path);
        }
    }

    Ok(())
}
