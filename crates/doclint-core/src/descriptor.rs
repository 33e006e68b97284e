//! Reading parsed-file descriptors from disk.
//!
//! A descriptor is the JSON hand-over of one schema file's AST. Parsing the
//! schema language itself happens upstream.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::types::{FileDescriptor, LintError};

impl FileDescriptor {
    /// Parse a descriptor from a JSON string. `origin` names the source in errors.
    pub fn from_json(origin: &str, content: &str) -> Result<Self, LintError> {
        serde_json::from_str(content).map_err(|source| LintError::Descriptor {
            path: origin.to_string(),
            source,
        })
    }

    /// Read and parse a descriptor file.
    pub fn load(path: &Path) -> Result<Self, LintError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: display.clone(),
            source,
        })?;
        Self::from_json(&display, &content)
    }
}

/// Expand the given paths into descriptor files.
///
/// Files are taken as-is. Directories are walked recursively for `*.json`
/// files. The result is sorted and deduplicated.
pub fn discover_descriptors(paths: &[PathBuf]) -> Result<Vec<PathBuf>, LintError> {
    let mut found = Vec::new();
    for path in paths {
        if path.is_file() {
            found.push(path.clone());
            continue;
        }
        if !path.exists() {
            return Err(LintError::Io {
                path: path.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file or directory"),
            });
        }
        for entry in WalkDir::new(path).follow_links(false) {
            let entry = entry.map_err(|e| LintError::Io {
                path: path.display().to_string(),
                source: e.into(),
            })?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "json")
            {
                found.push(entry.into_path());
            }
        }
    }
    found.sort();
    found.dedup();
    tracing::debug!(count = found.len(), "discovered descriptor files");
    Ok(found)
}
