//! Note formatting
//!
//! Renders study notes from Markdown to HTML with highlighted code blocks.

mod renderer;

pub use renderer::{excerpt, note_excerpt, plain_text, render_note};
