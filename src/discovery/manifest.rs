//! Project manifest (ringside.yaml) parsing.
//!
//! The manifest sets where wrestler files live and the defaults for
//! `ringside render`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RingsideError, Result};
use crate::render::MAX_SCALE;

/// Project manifest loaded from ringside.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories or files to scan for wrestler definitions.
    /// Defaults to the project root if empty.
    pub sources: Vec<String>,

    /// Output directory for rendered avatars.
    pub output: PathBuf,

    /// Default upscale factor for PNG output.
    pub scale: Option<u32>,

    /// Always pack a roster sheet alongside the individual avatars.
    pub sheet: bool,

    /// Gap in pixels between avatars on the roster sheet.
    pub padding: u32,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: PathBuf::from("dist"),
            scale: None,
            sheet: false,
            padding: 0,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a ringside.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RingsideError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| RingsideError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check ringside.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy().replace('\\', "/");
        self.excludes.iter().any(|p| matches_pattern(&path, p))
    }

    /// Get effective source paths, defaulting to the project root.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Get the effective scale factor, clamped to 1..=MAX_SCALE.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).clamp(1, MAX_SCALE)
    }
}

/// Minimal glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a plain substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(dir) = pattern
        .strip_prefix("**/")
        .and_then(|rest| rest.strip_suffix("/*"))
    {
        let needle = format!("{}/", dir);
        return path.starts_with(&needle) || path.contains(&format!("/{}", needle));
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !suffix.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(dir) = pattern.strip_suffix("/*") {
        let needle = format!("{}/", dir);
        return path.starts_with(&needle) || path.contains(&format!("/{}", needle));
    }

    path.contains(pattern)
}
