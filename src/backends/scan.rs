//! Candidate scanning backend
//!
//! Lists one directory level with walkdir and keeps entries whose file name
//! ends with the configured suffix.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::TruncateError;
use crate::core::paths::{has_suffix, make_relative};

/// A directory entry selected for truncation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Full path used for I/O
    pub path: PathBuf,

    /// Path relative to the scanned directory, used in reports
    pub name: String,
}

/// Build a candidate from a directory entry, or `None` when it is not one
fn to_candidate(path: &Path, dir: &Path, suffix: &str) -> Option<Candidate> {
    if !has_suffix(path, suffix) {
        return None;
    }

    if path.is_dir() {
        tracing::debug!(path = %path.display(), "skipping directory with matching suffix");
        return None;
    }

    let name = make_relative(path, dir)?;
    Some(Candidate {
        path: path.to_path_buf(),
        name,
    })
}

/// List candidates directly inside `dir`, sorted by file name.
///
/// Directories (and symlinks to directories) are never candidates. Other
/// entries are kept even if they cannot be read, so the failure surfaces
/// when the truncator opens them.
pub fn scan_candidates(dir: &Path, suffix: &str) -> Result<Vec<Candidate>, TruncateError> {
    let metadata = std::fs::metadata(dir).map_err(|e| TruncateError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(TruncateError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        ));
    }

    let mut candidates = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                if err.depth() == 0 {
                    return Err(TruncateError::io(path, err.into()));
                }
                match to_candidate(&path, dir, suffix) {
                    Some(candidate) => {
                        tracing::debug!(path = %path.display(), error = %err, "keeping unreadable candidate");
                        candidates.push(candidate);
                    }
                    None => {
                        tracing::debug!(path = %path.display(), error = %err, "skipping unreadable entry");
                    }
                }
                continue;
            }
        };

        if let Some(candidate) = to_candidate(entry.path(), dir, suffix) {
            candidates.push(candidate);
        }
    }

    Ok(candidates)
}
