//! Syntax highlighting module
//!
//! Regex rule tables that turn Java source into HTML markup with one
//! `<span class="code-…">` per highlighted run.
//!
//! ## Rule order
//!
//! ```text
//! comment → string → keyword → type → annotation → method → number
//! ```
//!
//! Each rule only sees text that earlier rules left unclaimed, so strings
//! and comments shield their contents from keyword and number rules.

mod highlights;
mod rulesets;

pub use highlights::{
    escape_html, render_tokens, Category, HighlightError, HighlightRule, HighlightToken,
    RuleTable, CATEGORY_ORDER,
};
pub use rulesets::{RuleSetId, JAVA_KEYWORDS, NOTE_KEYWORDS, NOTE_TYPES};
