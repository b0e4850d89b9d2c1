//! Program and note catalog
//!
//! Discovers the Java programs and study notes a site is built from, and
//! filters them by search text and category.

mod loader;
mod notes;
mod program;
mod search;

pub use loader::{DiscoveryStrategy, LoadedPrograms, ProgramLoader};
pub use notes::{builtin_notes, parse_note, Note, NoteLoader, BUILTIN_NOTES};
pub use program::{dedupe_slugs, describe, format_title, Program, Topic, DEFAULT_DESCRIPTION};
pub use search::{filter_notes, filter_programs, ALL_CATEGORIES};
