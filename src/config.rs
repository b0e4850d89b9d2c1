//! Site configuration
//!
//! Looked up in order: an explicit `--config` path, `./brewbook.yaml`,
//! `~/.config/brewbook/config.yaml`, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Files tried when the programs directory has no listing
pub const DEFAULT_MANUAL_FILES: &[&str] = &[
    "HelloWorld.java",
    "ArrayPrograms.java",
    "Loops.java",
    "OOP/Inheritance.java",
    "OOP/Polymorphism.java",
    "DataStructures/LinkedList.java",
    "DataStructures/BinaryTree.java",
];

/// Configuration for one site build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title shown in the header and page titles
    pub title: String,
    /// Directory scanned for `.java` programs
    pub programs_dir: PathBuf,
    /// Directory scanned for Markdown notes
    pub notes_dir: PathBuf,
    /// Where the generated site is written
    pub output_dir: PathBuf,
    /// Theme id (e.g., "classic-light", "github-dark")
    pub theme: String,
    /// Program paths (relative to `programs_dir`) used when listing fails
    pub manual_files: Vec<String>,
    /// Extra words highlighted as keywords in both rule sets
    pub extra_keywords: Vec<String>,
    /// Character budget for note excerpts
    pub excerpt_length: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Java Programs & Notes".to_string(),
            programs_dir: PathBuf::from("programs"),
            notes_dir: PathBuf::from("notes"),
            output_dir: PathBuf::from("site"),
            theme: crate::theme::DEFAULT_THEME_ID.to_string(),
            manual_files: DEFAULT_MANUAL_FILES.iter().map(|s| s.to_string()).collect(),
            extra_keywords: Vec::new(),
            excerpt_length: 150,
        }
    }
}

impl SiteConfig {
    /// Parse a config from YAML; missing fields take their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file that the user asked for explicitly
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from `explicit`, or search the usual places
    ///
    /// An explicit path must load. Discovered files that fail to parse are
    /// logged and skipped.
    pub fn load(explicit: Option<&Path>, project_root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = [
            Some(crate::config_paths::project_config_file(project_root)),
            crate::config_paths::config_file(),
        ];

        for path in candidates.into_iter().flatten() {
            if !path.exists() {
                tracing::debug!("No config at {}", path.display());
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("Ignoring config at {}: {}", path.display(), e),
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Resolve relative directories against `root`
    pub fn resolve_paths(mut self, root: &Path) -> Self {
        for dir in [
            &mut self.programs_dir,
            &mut self.notes_dir,
            &mut self.output_dir,
        ] {
            if dir.is_relative() {
                *dir = root.join(&*dir);
            }
        }
        self
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> Result<()> {
        if self.excerpt_length == 0 {
            return Err(Error::Config(
                "excerpt_length must be greater than zero".to_string(),
            ));
        }
        if self.theme.trim().is_empty() {
            return Err(Error::Config("theme must not be empty".to_string()));
        }
        Ok(())
    }
}
