//! Study notes
//!
//! Notes are Markdown files with a YAML front matter block:
//!
//! ```text
//! ---
//! title: Java Basics
//! category: basics
//! updated: 2024-01-15
//! ---
//! ### Java Programming Basics
//! ...
//! ```
//!
//! When the notes directory yields nothing, the built-in notes are used.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Built-in notes, embedded at compile time (file name, content)
pub const BUILTIN_NOTES: &[(&str, &str)] = &[
    ("java-basics.md", include_str!("../../notes/java-basics.md")),
    ("oop-concepts.md", include_str!("../../notes/oop-concepts.md")),
    ("collections.md", include_str!("../../notes/collections.md")),
    ("exceptions.md", include_str!("../../notes/exceptions.md")),
    (
        "multithreading.md",
        include_str!("../../notes/multithreading.md"),
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// 1-based position in load order
    pub id: usize,
    pub title: String,
    pub category: String,
    /// Markdown body
    pub content: String,
    pub last_updated: NaiveDate,
}

impl Note {
    /// Date as shown on note cards (e.g. `1/15/2024`)
    pub fn display_date(&self) -> String {
        self.last_updated.format("%-m/%-d/%Y").to_string()
    }
}

#[derive(Debug, Deserialize)]
struct FrontMatter {
    title: String,
    category: String,
    updated: NaiveDate,
}

/// Split `---\n<yaml>\n---\n<body>` into its two parts
fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;
    let end = rest.find("\n---")?;
    let yaml = &rest[..end];
    let after = &rest[end + "\n---".len()..];
    let body = after.split_once('\n').map(|(_, body)| body).unwrap_or("");
    Some((yaml, body))
}

/// Parse one note; `path` is only used in error messages
pub fn parse_note(id: usize, path: &Path, text: &str) -> Result<Note> {
    let (yaml, body) = split_front_matter(text).ok_or_else(|| Error::FrontMatter {
        path: path.to_path_buf(),
        reason: "missing `---` front matter block".to_string(),
    })?;
    let meta: FrontMatter = serde_yaml::from_str(yaml).map_err(|e| Error::FrontMatter {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Note {
        id,
        title: meta.title,
        category: meta.category.to_lowercase(),
        content: body.trim().to_string(),
        last_updated: meta.updated,
    })
}

/// The embedded notes
pub fn builtin_notes() -> Vec<Note> {
    let mut notes = Vec::with_capacity(BUILTIN_NOTES.len());
    for (name, text) in BUILTIN_NOTES {
        match parse_note(notes.len() + 1, Path::new(name), text) {
            Ok(note) => notes.push(note),
            Err(e) => tracing::warn!("Skipping built-in note: {}", e),
        }
    }
    notes
}

#[derive(Debug, Clone)]
pub struct NoteLoader {
    dir: PathBuf,
}

impl NoteLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load `*.md` notes sorted by file name, or the built-in notes
    pub fn load(&self) -> Vec<Note> {
        let notes = match self.load_dir() {
            Ok(notes) => notes,
            Err(e) => {
                tracing::debug!("Notes directory {} not readable: {}", self.dir.display(), e);
                Vec::new()
            }
        };

        if notes.is_empty() {
            tracing::info!("No notes in {}, using built-in notes", self.dir.display());
            return builtin_notes();
        }

        tracing::info!(count = notes.len(), "Loaded notes");
        notes
    }

    fn load_dir(&self) -> std::io::Result<Vec<Note>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "md"))
            .collect();
        paths.sort();

        let mut notes = Vec::with_capacity(paths.len());
        for path in paths {
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Could not read note {}: {}", path.display(), e);
                    continue;
                }
            };
            match parse_note(notes.len() + 1, &path, &text) {
                Ok(note) => notes.push(note),
                Err(e) => tracing::warn!("{}", e),
            }
        }
        Ok(notes)
    }
}
