//! Program discovery
//!
//! The directory listing is tried first. When it fails or finds nothing,
//! the manual file list from the config is used instead.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::program::Program;
use crate::config::SiteConfig;

/// How the program list was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryStrategy {
    /// Recursive listing of the programs directory
    Listing,
    /// The configured manual file list
    Manual,
}

impl DiscoveryStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscoveryStrategy::Listing => "listing",
            DiscoveryStrategy::Manual => "manual",
        }
    }
}

/// Programs loaded in one pass
#[derive(Debug, Clone)]
pub struct LoadedPrograms {
    pub programs: Vec<Program>,
    pub strategy: DiscoveryStrategy,
}

#[derive(Debug, Clone)]
pub struct ProgramLoader {
    base_path: PathBuf,
    manual_files: Vec<String>,
}

impl ProgramLoader {
    pub fn new(base_path: impl Into<PathBuf>, manual_files: Vec<String>) -> Self {
        Self {
            base_path: base_path.into(),
            manual_files,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.programs_dir, config.manual_files.clone())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// All `.java` files under the base path, relative and `/`-separated, sorted
    pub fn list_files(&self) -> io::Result<Vec<String>> {
        let mut files = Vec::new();
        collect_java_files(&self.base_path, &self.base_path, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Discover and read every program
    ///
    /// Unreadable files are skipped with a warning; ids stay contiguous.
    pub fn load(&self) -> LoadedPrograms {
        let (files, strategy) = match self.list_files() {
            Ok(files) if !files.is_empty() => (files, DiscoveryStrategy::Listing),
            Ok(_) => {
                tracing::info!(
                    "No programs listed in {}, using manual file list",
                    self.base_path.display()
                );
                (self.manual_files.clone(), DiscoveryStrategy::Manual)
            }
            Err(e) => {
                tracing::info!(
                    "Directory listing of {} not available ({}), using manual file list",
                    self.base_path.display(),
                    e
                );
                (self.manual_files.clone(), DiscoveryStrategy::Manual)
            }
        };

        let mut programs = Vec::with_capacity(files.len());
        for filename in files {
            let path = self.base_path.join(&filename);
            match fs::read_to_string(&path) {
                Ok(code) => {
                    tracing::debug!("Loaded program {}", path.display());
                    programs.push(Program::new(programs.len() + 1, filename, code));
                }
                Err(e) => {
                    tracing::warn!("Could not load {}: {}", path.display(), e);
                }
            }
        }

        tracing::info!(
            count = programs.len(),
            strategy = strategy.as_str(),
            "Loaded programs"
        );

        LoadedPrograms { programs, strategy }
    }
}

fn collect_java_files(root: &Path, dir: &Path, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if hidden {
            continue;
        }

        if entry.file_type()?.is_dir() {
            collect_java_files(root, &path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "java") {
            if let Ok(relative) = path.strip_prefix(root) {
                let parts: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }
    Ok(())
}
