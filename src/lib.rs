//! brewbook - static site generator for Java example programs and notes
//!
//! This crate provides the catalog, the rule-table syntax highlighter, note
//! rendering, and the page generator behind the `brewbook` binary.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod markdown;
pub mod site;
pub mod syntax;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use site::AppState;
pub use syntax::{Category, RuleSetId, RuleTable};
pub use theme::Theme;
