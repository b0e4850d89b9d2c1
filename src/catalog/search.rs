//! Search and category filtering for program and note cards

use super::notes::Note;
use super::program::Program;

/// Category filter value that matches everything
pub const ALL_CATEGORIES: &str = "all";

fn category_matches(actual: &str, wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => {
            let wanted = wanted.trim();
            wanted.is_empty()
                || wanted.eq_ignore_ascii_case(ALL_CATEGORIES)
                || wanted.eq_ignore_ascii_case(actual)
        }
    }
}

/// Programs whose title or description contains `query` (case-insensitive)
pub fn filter_programs<'a>(
    programs: &'a [Program],
    query: &str,
    category: Option<&str>,
) -> Vec<&'a Program> {
    let needle = query.trim().to_lowercase();
    programs
        .iter()
        .filter(|p| category_matches(p.category.as_str(), category))
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Notes whose title or excerpt contains `query` (case-insensitive)
pub fn filter_notes<'a>(
    notes: &'a [Note],
    query: &str,
    category: Option<&str>,
    excerpt_length: usize,
) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    notes
        .iter()
        .filter(|n| category_matches(&n.category, category))
        .filter(|n| {
            needle.is_empty()
                || n.title.to_lowercase().contains(&needle)
                || crate::markdown::note_excerpt(&n.content, excerpt_length)
                    .to_lowercase()
                    .contains(&needle)
        })
        .collect()
}
