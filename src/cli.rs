//! Command-line argument parsing
//!
//! Supports:
//! - Building the site
//! - Highlighting a single file to stdout
//! - Listing and searching programs and notes
//! - Listing available themes

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::syntax::RuleSetId;

/// Static site generator for Java example programs and study notes
#[derive(Parser, Debug)]
#[command(
    name = "brewbook",
    version,
    about = "Static site generator for Java programs and notes"
)]
pub struct CliArgs {
    /// Config file (default: ./brewbook.yaml, then ~/.config/brewbook/config.yaml)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build the site
    Build {
        /// Directory containing .java programs
        #[arg(long, value_name = "DIR")]
        programs: Option<PathBuf>,
        /// Directory containing Markdown notes
        #[arg(long, value_name = "DIR")]
        notes: Option<PathBuf>,
        /// Output directory
        #[arg(short = 'o', long, value_name = "DIR")]
        out: Option<PathBuf>,
        /// Theme id
        #[arg(long, value_name = "ID")]
        theme: Option<String>,
    },
    /// Print a file as highlighted HTML
    Highlight {
        /// File to highlight
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Rule set: code or notes
        #[arg(long, default_value = "code")]
        rules: String,
    },
    /// List programs
    List {
        /// Case-insensitive title/description filter
        #[arg(short, long, default_value = "")]
        query: String,
        /// Topic filter (e.g. oop, loops)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List notes
    Notes {
        /// Case-insensitive title/excerpt filter
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category filter (e.g. basics)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List available themes
    Themes,
}

/// Config values given on the command line for `build`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildOverrides {
    pub programs_dir: Option<PathBuf>,
    pub notes_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub theme: Option<String>,
}

impl BuildOverrides {
    /// Apply the overrides on top of a loaded config
    pub fn apply(&self, mut config: SiteConfig) -> SiteConfig {
        if let Some(dir) = &self.programs_dir {
            config.programs_dir = dir.clone();
        }
        if let Some(dir) = &self.notes_dir {
            config.notes_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config
    }
}

/// What the binary should do
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    Build(BuildOverrides),
    Highlight {
        path: PathBuf,
        rule_set: RuleSetId,
    },
    List {
        query: String,
        category: Option<String>,
    },
    Notes {
        query: String,
        category: Option<String>,
    },
    Themes,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Explicit config file, if any
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = match self.command {
            Command::Build {
                programs,
                notes,
                out,
                theme,
            } => {
                if theme.as_deref().is_some_and(|t| t.trim().is_empty()) {
                    return Err("Theme id cannot be empty".to_string());
                }
                StartupMode::Build(BuildOverrides {
                    programs_dir: programs,
                    notes_dir: notes,
                    output_dir: out,
                    theme,
                })
            }
            Command::Highlight { file, rules } => {
                let rule_set = RuleSetId::from_name(&rules).ok_or_else(|| {
                    format!("Unknown rule set '{}' (expected code or notes)", rules)
                })?;
                StartupMode::Highlight {
                    path: file,
                    rule_set,
                }
            }
            Command::List { query, category } => StartupMode::List { query, category },
            Command::Notes { query, category } => StartupMode::Notes { query, category },
            Command::Themes => StartupMode::Themes,
        };

        Ok(StartupConfig {
            mode,
            config_path: self.config,
            verbose: self.verbose,
        })
    }
}
