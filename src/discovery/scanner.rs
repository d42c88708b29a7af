//! File system scanner for wrestler definitions.
//!
//! Recursively walks directories and collects files named
//! `*.wrestler.yaml`, `*.wrestler.yml` or `*.wrestler.json`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

const WRESTLER_SUFFIXES: [&str; 3] = [".wrestler.yaml", ".wrestler.yml", ".wrestler.json"];

/// Whether a path names a wrestler definition file.
pub fn is_wrestler_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| WRESTLER_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// Scan a directory for wrestler files, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_wrestler_file(p))
        .filter(|p| {
            let relative = p.strip_prefix(root).unwrap_or(p);
            !manifest.is_excluded(relative)
        })
        .collect();

    found.sort();
    found
}

/// Expand a mix of files and directories into wrestler files.
///
/// Files are kept as given, whatever their name; directories are scanned.
pub fn expand_paths(paths: &[PathBuf], manifest: &Manifest) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(scan_directory(path, manifest));
        } else {
            files.push(path.clone());
        }
    }
    files
}
