//! Wrestler file discovery for ringside projects.
//!
//! A project is a directory, optionally holding a `ringside.yaml` manifest,
//! with `*.wrestler.yaml|yml|json` files somewhere beneath its sources.
//!
//! # Example
//!
//! ```no_run
//! use ringside::discovery::discover;
//!
//! let project = discover("./roster")?;
//! println!("Found {} wrestlers", project.files.len());
//! # Ok::<(), ringside::RingsideError>(())
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{expand_paths, is_wrestler_file, scan_directory};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "ringside.yaml";

/// Result of discovering wrestler files in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no ringside.yaml was found).
    pub manifest: Manifest,

    /// Whether a ringside.yaml manifest was found.
    pub has_manifest: bool,

    /// Wrestler files, in source order then path order.
    pub files: Vec<PathBuf>,
}

/// Load `ringside.yaml` from `dir`, or fall back to defaults.
///
/// Returns the manifest and whether one was found.
pub fn load_manifest(dir: &Path) -> Result<(Manifest, bool)> {
    let path = dir.join(MANIFEST_FILENAME);
    if path.is_file() {
        Ok((Manifest::load(&path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Discover wrestler files in a project directory.
///
/// Uses the manifest's source paths when a `ringside.yaml` is present,
/// otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;

    let mut files = Vec::new();
    for source in manifest.effective_sources() {
        let source_path = if Path::new(&source).is_absolute() {
            PathBuf::from(&source)
        } else {
            root.join(&source)
        };
        files.extend(scan_directory(&source_path, &manifest));
    }

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempdir().unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_discover_without_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("crusher.wrestler.yaml"), "name: Crusher").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(!result.has_manifest);
        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_discover_with_manifest() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(MANIFEST_FILENAME),
            "sources:\n  - roster/\noutput: build\nscale: 2\n",
        )
        .unwrap();
        fs::create_dir_all(dir.path().join("roster")).unwrap();
        fs::write(dir.path().join("roster/venom.wrestler.json"), "{}").unwrap();
        fs::write(dir.path().join("outside.wrestler.yaml"), "name: X").unwrap();

        let result = discover(dir.path()).unwrap();

        assert!(result.has_manifest);
        assert_eq!(result.manifest.effective_scale(), 2);
        assert_eq!(result.manifest.output, PathBuf::from("build"));
        assert_eq!(result.files.len(), 1);
        assert!(result.files[0].ends_with("roster/venom.wrestler.json"));
    }

    #[test]
    fn test_discover_bad_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "scale: [").unwrap();
        assert!(discover(dir.path()).is_err());
    }
}
