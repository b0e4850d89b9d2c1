//! Application state for a site build
//!
//! Built once at startup and handed to whatever needs the catalog, the
//! theme, or the rule tables.

use crate::catalog::{dedupe_slugs, DiscoveryStrategy, Note, NoteLoader, Program, ProgramLoader};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::syntax::{RuleSetId, RuleTable};
use crate::theme::{self, Theme};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: SiteConfig,
    pub theme: Theme,
    pub programs: Vec<Program>,
    /// How `programs` was discovered
    pub strategy: DiscoveryStrategy,
    pub notes: Vec<Note>,
    /// Rules for the program viewer
    pub code_rules: RuleTable,
    /// Rules for code inside notes
    pub note_rules: RuleTable,
}

impl AppState {
    /// Load the theme, rule tables, programs, and notes named by `config`
    pub fn load(config: SiteConfig) -> Result<Self> {
        let theme = theme::load_theme(&config.theme)?;
        let loaded = ProgramLoader::from_config(&config).load();
        let notes = NoteLoader::new(&config.notes_dir).load();
        Self::from_parts(config, theme, loaded.programs, loaded.strategy, notes)
    }

    /// Assemble state from already-loaded parts
    ///
    /// Program slugs are made unique here, so every program gets its own page.
    pub fn from_parts(
        config: SiteConfig,
        theme: Theme,
        mut programs: Vec<Program>,
        strategy: DiscoveryStrategy,
        notes: Vec<Note>,
    ) -> Result<Self> {
        dedupe_slugs(&mut programs);
        let code_rules = RuleTable::for_rule_set(RuleSetId::Code)
            .with_extra_keywords(&config.extra_keywords)?;
        let note_rules = RuleTable::for_rule_set(RuleSetId::Notes)
            .with_extra_keywords(&config.extra_keywords)?;

        tracing::info!(
            programs = programs.len(),
            notes = notes.len(),
            theme = %theme.name,
            "Application state ready"
        );

        Ok(Self {
            config,
            theme,
            programs,
            strategy,
            notes,
            code_rules,
            note_rules,
        })
    }

    pub fn rules_for(&self, id: RuleSetId) -> &RuleTable {
        match id {
            RuleSetId::Code => &self.code_rules,
            RuleSetId::Notes => &self.note_rules,
        }
    }

    pub fn program(&self, id: usize) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn note(&self, id: usize) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }
}
