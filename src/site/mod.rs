//! Static site generation
//!
//! [`build`] renders every page for an [`AppState`] into its output
//! directory. Existing files are overwritten; nothing else is removed.

mod pages;
mod state;
mod style;

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::catalog::{DiscoveryStrategy, Program, Topic};
use crate::error::Result;
use crate::syntax::RuleSetId;

pub use pages::{
    download_path, index_page, layout, note_page, note_page_path, notes_page, program_page,
    program_page_path,
};
pub use state::AppState;
pub use style::generate_css;

/// What a build wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// HTML pages written
    pub pages: usize,
    /// All files written, pages included
    pub files: usize,
    pub programs: usize,
    pub notes: usize,
    pub strategy: DiscoveryStrategy,
}

/// Entry of `programs.json`
#[derive(Debug, Serialize)]
struct ManifestEntry<'a> {
    id: usize,
    title: &'a str,
    category: Topic,
    description: &'a str,
    filename: &'a str,
    page: String,
    download: String,
}

impl<'a> From<&'a Program> for ManifestEntry<'a> {
    fn from(program: &'a Program) -> Self {
        Self {
            id: program.id,
            title: &program.title,
            category: program.category,
            description: &program.description,
            filename: &program.filename,
            page: program_page_path(program),
            download: download_path(program),
        }
    }
}

struct SiteWriter<'a> {
    root: &'a Path,
    pages: usize,
    files: usize,
}

impl<'a> SiteWriter<'a> {
    fn new(root: &'a Path) -> Self {
        Self {
            root,
            pages: 0,
            files: 0,
        }
    }

    /// Write `contents` to `relative` (a `/`-separated path under the root)
    fn write(&mut self, relative: &str, contents: impl AsRef<[u8]>) -> Result<()> {
        let path = relative
            .split('/')
            .fold(self.root.to_path_buf(), |path, part| path.join(part));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        tracing::debug!("Wrote {}", path.display());

        self.files += 1;
        if relative.ends_with(".html") {
            self.pages += 1;
        }
        Ok(())
    }
}

/// Render the whole site into `state.config.output_dir`
pub fn build(state: &AppState) -> Result<BuildReport> {
    let config = &state.config;
    let title = config.title.as_str();
    fs::create_dir_all(&config.output_dir)?;
    let mut out = SiteWriter::new(&config.output_dir);

    out.write("style.css", generate_css(&state.theme))?;
    out.write("index.html", index_page(title, &state.programs))?;

    for program in &state.programs {
        out.write(
            &program_page_path(program),
            program_page(title, program, state.rules_for(RuleSetId::Code)),
        )?;
        out.write(&download_path(program), &program.code)?;
    }

    let manifest: Vec<ManifestEntry> = state.programs.iter().map(ManifestEntry::from).collect();
    out.write("programs.json", serde_json::to_string_pretty(&manifest)?)?;

    out.write(
        "notes.html",
        notes_page(title, &state.notes, config.excerpt_length),
    )?;
    for note in &state.notes {
        out.write(
            &note_page_path(note),
            note_page(title, note, state.rules_for(RuleSetId::Notes)),
        )?;
    }

    let report = BuildReport {
        pages: out.pages,
        files: out.files,
        programs: state.programs.len(),
        notes: state.notes.len(),
        strategy: state.strategy,
    };

    tracing::info!(
        pages = report.pages,
        files = report.files,
        strategy = report.strategy.as_str(),
        "Built site in {}",
        config.output_dir.display()
    );

    Ok(report)
}
