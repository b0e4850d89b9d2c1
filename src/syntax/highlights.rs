//! Highlight categories, rules, and the rule-table highlighter
//!
//! A [`RuleTable`] holds regex rules ordered by [`Category`]. Rules run one
//! after another, and each rule only scans the text that no earlier rule has
//! claimed. Comments and strings therefore keep any keyword-like or numeric
//! text they contain.
//!
//! Known limitation: comments run before strings, so a `//` inside a string
//! literal starts a comment that runs to the end of the line. This is a
//! display aid, not a tokenizer.

use std::ops::Range;

use regex::Regex;
use thiserror::Error;

/// Semantic class of a highlighted span.
///
/// Declaration order is the fixed application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Comment,
    String,
    Keyword,
    Type,
    Annotation,
    Method,
    Number,
}

/// All categories in application order
pub const CATEGORY_ORDER: [Category; 7] = [
    Category::Comment,
    Category::String,
    Category::Keyword,
    Category::Type,
    Category::Annotation,
    Category::Method,
    Category::Number,
];

impl Category {
    /// Position in the application order (0 runs first)
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Annotation => "annotation",
            Category::Method => "method",
            Category::Number => "number",
        }
    }

    /// CSS class used on the generated `<span>`
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Comment => "code-comment",
            Category::String => "code-string",
            Category::Keyword => "code-keyword",
            Category::Type => "code-type",
            Category::Annotation => "code-annotation",
            Category::Method => "code-method",
            Category::Number => "code-number",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum HighlightError {
    /// The caller had no source text to hand over
    #[error("no source text to highlight")]
    MissingSource,

    #[error("invalid {category} pattern: {source}")]
    InvalidPattern {
        category: Category,
        source: regex::Error,
    },
}

/// A pattern mapped to a category.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    category: Category,
    pattern: Regex,
    /// Capture group that gets wrapped (0 = whole match)
    group: usize,
}

impl HighlightRule {
    pub fn new(category: Category, pattern: &str) -> Result<Self, HighlightError> {
        let pattern = Regex::new(pattern)
            .map_err(|source| HighlightError::InvalidPattern { category, source })?;
        Ok(Self {
            category,
            pattern,
            group: 0,
        })
    }

    /// Build a rule matching any of `words` as a whole word
    pub fn keywords<I, S>(category: Category, words: I) -> Result<Self, HighlightError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let alternatives: Vec<String> = words
            .into_iter()
            .map(|word| regex::escape(word.as_ref()))
            .collect();
        Self::new(category, &format!(r"\b(?:{})\b", alternatives.join("|")))
    }

    /// Wrap only capture group `group` instead of the whole match
    pub fn with_group(mut self, group: usize) -> Self {
        self.group = group;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Application order of this rule, derived from its category
    pub fn order(&self) -> usize {
        self.category.rank()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// A highlighted byte range of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    /// Start byte (inclusive)
    pub start: usize,
    /// End byte (exclusive)
    pub end: usize,
    pub category: Category,
}

impl HighlightToken {
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Ordered set of highlight rules
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<HighlightRule>,
}

impl RuleTable {
    pub fn new(rules: impl IntoIterator<Item = HighlightRule>) -> Self {
        let mut table = Self::default();
        for rule in rules {
            table.push(rule);
        }
        table
    }

    /// Insert a rule after every rule of the same or an earlier category
    pub fn push(&mut self, rule: HighlightRule) {
        let idx = self
            .rules
            .partition_point(|existing| existing.order() <= rule.order());
        self.rules.insert(idx, rule);
    }

    pub fn rules(&self) -> &[HighlightRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Categories this table produces, in application order
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = self.rules.iter().map(|r| r.category).collect();
        categories.dedup();
        categories
    }

    /// Run every rule over the unclaimed parts of `source`.
    ///
    /// Tokens come back sorted by start and never overlap.
    pub fn tokenize(&self, source: &str) -> Vec<HighlightToken> {
        let mut tokens = Vec::new();
        let mut gaps: Vec<Range<usize>> = if source.is_empty() {
            Vec::new()
        } else {
            vec![0..source.len()]
        };

        for rule in &self.rules {
            let mut remaining = Vec::with_capacity(gaps.len());

            for gap in gaps {
                let text = &source[gap.clone()];
                let mut cursor = 0;

                for caps in rule.pattern.captures_iter(text) {
                    let Some(m) = caps.get(rule.group) else {
                        continue;
                    };
                    if m.is_empty() {
                        continue;
                    }
                    if m.start() > cursor {
                        remaining.push(gap.start + cursor..gap.start + m.start());
                    }
                    tokens.push(HighlightToken {
                        start: gap.start + m.start(),
                        end: gap.start + m.end(),
                        category: rule.category,
                    });
                    cursor = m.end();
                }

                if cursor < text.len() {
                    remaining.push(gap.start + cursor..gap.end);
                }
            }

            gaps = remaining;
            if gaps.is_empty() {
                break;
            }
        }

        tokens.sort_by_key(|token| token.start);
        tokens
    }

    /// Highlight `source` into escaped markup with category spans
    pub fn highlight(&self, source: &str) -> String {
        let tokens = self.tokenize(source);
        tracing::trace!(
            bytes = source.len(),
            tokens = tokens.len(),
            "highlighted source"
        );
        render_tokens(source, &tokens)
    }

    /// Like [`highlight`](Self::highlight), for callers whose source may be missing
    pub fn try_highlight(&self, source: Option<&str>) -> Result<String, HighlightError> {
        source
            .map(|text| self.highlight(text))
            .ok_or(HighlightError::MissingSource)
    }
}

/// Render `source` with `tokens` (sorted, non-overlapping) as HTML
pub fn render_tokens(source: &str, tokens: &[HighlightToken]) -> String {
    let mut out = String::with_capacity(source.len() + tokens.len() * 32);
    let mut pos = 0;

    for token in tokens {
        if token.start < pos {
            continue;
        }
        escape_html_into(&source[pos..token.start], &mut out);
        out.push_str("<span class=\"");
        out.push_str(token.category.css_class());
        out.push_str("\">");
        escape_html_into(token.text(source), &mut out);
        out.push_str("</span>");
        pos = token.end;
    }

    escape_html_into(&source[pos..], &mut out);
    out
}

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(text, &mut out);
    out
}

fn escape_html_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
