use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use brewbook::catalog::{
    filter_notes, filter_programs, DiscoveryStrategy, NoteLoader, ProgramLoader,
};
use brewbook::cli::{CliArgs, StartupConfig, StartupMode};
use brewbook::config::SiteConfig;
use brewbook::syntax::{RuleSetId, RuleTable};
use brewbook::theme::{self, ThemeSource};
use brewbook::{site, AppState};

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    brewbook::tracing::init(startup.verbose);

    let root = std::env::current_dir().context("Failed to read current directory")?;
    run(startup, &root)
}

fn run(startup: StartupConfig, root: &Path) -> Result<()> {
    let config = SiteConfig::load(startup.config_path.as_deref(), root)?;

    match startup.mode {
        StartupMode::Build(overrides) => {
            let config = overrides.apply(config).resolve_paths(root);
            let state = AppState::load(config)?;
            let report = site::build(&state).with_context(|| {
                format!(
                    "Failed to build site in {}",
                    state.config.output_dir.display()
                )
            })?;
            println!(
                "Built {} pages ({} files) for {} programs and {} notes into {}",
                report.pages,
                report.files,
                report.programs,
                report.notes,
                state.config.output_dir.display()
            );
            if report.strategy == DiscoveryStrategy::Manual {
                println!("Programs came from the manual file list");
            }
        }
        StartupMode::Highlight { path, rule_set } => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let rules = rules_for(rule_set, &config)?;
            tracing::info!(
                "Highlighting {} with {} rules",
                path.display(),
                rule_set.display_name()
            );
            println!("{}", rules.highlight(&source));
        }
        StartupMode::List { query, category } => {
            let config = config.resolve_paths(root);
            let loaded = ProgramLoader::from_config(&config).load();
            for program in filter_programs(&loaded.programs, &query, category.as_deref()) {
                println!(
                    "{:>3}  {:<15} {:<28} {}",
                    program.id,
                    program.category.as_str(),
                    program.title,
                    program.filename
                );
            }
        }
        StartupMode::Notes { query, category } => {
            let config = config.resolve_paths(root);
            let notes = NoteLoader::new(&config.notes_dir).load();
            for note in filter_notes(&notes, &query, category.as_deref(), config.excerpt_length) {
                println!(
                    "{:>3}  {:<15} {:<10} {}",
                    note.id,
                    note.category,
                    note.display_date(),
                    note.title
                );
            }
        }
        StartupMode::Themes => {
            for info in theme::list_available_themes() {
                let source = match info.source {
                    ThemeSource::User => "user",
                    ThemeSource::Builtin => "builtin",
                };
                let marker = if info.id == config.theme { "*" } else { " " };
                println!("{} {:<20} {:<24} ({})", marker, info.id, info.name, source);
            }
        }
    }

    Ok(())
}

fn rules_for(id: RuleSetId, config: &SiteConfig) -> Result<RuleTable> {
    Ok(RuleTable::for_rule_set(id).with_extra_keywords(&config.extra_keywords)?)
}
