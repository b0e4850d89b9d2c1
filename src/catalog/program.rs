//! Program entries and the metadata derived from their paths and source

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

/// Description used when a program has no leading `//` comment
pub const DEFAULT_DESCRIPTION: &str = "Java program demonstrating important concepts";

static CAPITAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").expect("valid regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z])([A-Z][a-z])").expect("valid regex"));
static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").expect("valid regex"));

/// Grouping of programs, derived from the file path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Basic,
    Arrays,
    Loops,
    Oop,
    DataStructures,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Basic,
        Topic::Arrays,
        Topic::Loops,
        Topic::Oop,
        Topic::DataStructures,
    ];

    /// Classify a program by its path (case-insensitive)
    pub fn for_filename(filename: &str) -> Self {
        let path = filename.to_lowercase();
        if path.contains("oop/") {
            Topic::Oop
        } else if path.contains("datastructures/") {
            Topic::DataStructures
        } else if path.contains("array") {
            Topic::Arrays
        } else if path.contains("loop") {
            Topic::Loops
        } else {
            Topic::Basic
        }
    }

    /// Identifier used in `data-category` attributes and filters
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Basic => "basic",
            Topic::Arrays => "arrays",
            Topic::Loops => "loops",
            Topic::Oop => "oop",
            Topic::DataStructures => "datastructures",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Basic => "Basics",
            Topic::Arrays => "Arrays",
            Topic::Loops => "Loops",
            Topic::Oop => "OOP",
            Topic::DataStructures => "Data Structures",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Java example program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Program {
    /// 1-based position in load order
    pub id: usize,
    pub title: String,
    pub category: Topic,
    pub description: String,
    /// Path relative to the programs directory, `/`-separated
    pub filename: String,
    /// File-name-safe identifier for the program's page
    #[serde(skip)]
    pub slug: String,
    #[serde(skip)]
    pub code: String,
}

impl Program {
    pub fn new(id: usize, filename: impl Into<String>, code: impl Into<String>) -> Self {
        let filename = filename.into();
        let code = code.into();
        Self {
            id,
            title: format_title(&filename),
            category: Topic::for_filename(&filename),
            description: describe(&code),
            slug: slugify(&filename, id),
            filename,
            code,
        }
    }

    /// Number of display lines (a trailing newline starts an empty line)
    pub fn line_count(&self) -> usize {
        self.code.split('\n').count()
    }
}

fn slugify(filename: &str, id: usize) -> String {
    let stem = filename.strip_suffix(".java").unwrap_or(filename);
    let mut slug = String::with_capacity(stem.len());
    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        format!("program-{}", id)
    } else {
        slug.to_string()
    }
}

/// Make every slug unique by appending the program id to repeats
///
/// The first program keeps its slug; `OOP_Inheritance.java` loaded after
/// `OOP/Inheritance.java` becomes `oop-inheritance-2`.
pub fn dedupe_slugs(programs: &mut [Program]) {
    let mut seen = HashSet::new();
    for program in programs.iter_mut() {
        while seen.contains(&program.slug) {
            tracing::debug!(
                "Slug {} of {} already taken",
                program.slug,
                program.filename
            );
            program.slug = format!("{}-{}", program.slug, program.id);
        }
        seen.insert(program.slug.clone());
    }
}

/// Turn `OOP/ArrayPrograms.java` into `Array Programs`
pub fn format_title(filename: &str) -> String {
    let without_ext = filename.replacen(".java", "", 1);
    let name = without_ext.rsplit('/').next().unwrap_or_default();
    let spaced = CAPITAL.replace_all(name, " $1");
    let split = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    let titled = WORD_START.replace_all(&split, |caps: &Captures| caps[0].to_uppercase());
    titled.trim().to_string()
}

/// First `//` comment line with some substance, or the default description
pub fn describe(code: &str) -> String {
    code.lines()
        .find(|line| {
            let trimmed = line.trim();
            trimmed.starts_with("//") && trimmed.chars().count() > 5
        })
        .map(|line| line.replacen("//", "", 1).trim().to_string())
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string())
}
