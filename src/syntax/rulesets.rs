//! Built-in rule sets for Java code
//!
//! `code` drives the program viewer, `notes` the code embedded in study
//! notes. Both are compiled once and cloned out (regexes share their
//! compiled program).

use std::sync::LazyLock;

use super::highlights::{Category, HighlightError, HighlightRule, RuleTable};

/// Identifier of a built-in rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleSetId {
    /// Program viewer: every Java keyword, methods, numbers
    #[default]
    Code,
    /// Note code blocks: core keywords plus common types
    Notes,
}

impl RuleSetId {
    pub const ALL: [RuleSetId; 2] = [RuleSetId::Code, RuleSetId::Notes];

    /// Parse a rule set name as used in config files and on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "code" | "java" | "viewer" => Some(RuleSetId::Code),
            "notes" | "note" => Some(RuleSetId::Notes),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleSetId::Code => "code",
            RuleSetId::Notes => "notes",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RuleSetId::Code => "Java (program viewer)",
            RuleSetId::Notes => "Java (note code blocks)",
        }
    }
}

/// Java reserved words, plus `main` and `String` which the viewer has
/// always shown as keywords
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "main",
    "String",
];

pub const NOTE_KEYWORDS: &[&str] = &[
    "public",
    "private",
    "protected",
    "class",
    "interface",
    "abstract",
    "extends",
    "implements",
    "static",
    "final",
    "void",
    "return",
    "new",
    "this",
    "super",
];

pub const NOTE_TYPES: &[&str] = &[
    "int",
    "String",
    "boolean",
    "char",
    "double",
    "float",
    "long",
    "List",
    "Map",
    "Set",
    "ArrayList",
    "HashMap",
    "HashSet",
];

/// `//` to end of line, or a `/* */` block across lines
const COMMENT: &str = r"//[^\n]*|/\*[\s\S]*?\*/";
/// Double-quoted, single line, backslash escapes
const STRING: &str = r#""(?:[^"\\\n]|\\.)*""#;
const ANNOTATION: &str = r"@\w+";
/// Identifier directly followed by `(`; group 1 is the identifier
const METHOD: &str = r"\b(\w+)\(";
const NUMBER: &str = r"\b\d+\b";

static CODE_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    build(RuleSetId::Code).expect("built-in code rules are valid regexes")
});

static NOTE_RULES: LazyLock<RuleTable> = LazyLock::new(|| {
    build(RuleSetId::Notes).expect("built-in note rules are valid regexes")
});

fn build(id: RuleSetId) -> Result<RuleTable, HighlightError> {
    let rules = match id {
        RuleSetId::Code => vec![
            HighlightRule::new(Category::Comment, COMMENT)?,
            HighlightRule::new(Category::String, STRING)?,
            HighlightRule::keywords(Category::Keyword, JAVA_KEYWORDS)?,
            HighlightRule::new(Category::Annotation, ANNOTATION)?,
            HighlightRule::new(Category::Method, METHOD)?.with_group(1),
            HighlightRule::new(Category::Number, NUMBER)?,
        ],
        RuleSetId::Notes => vec![
            HighlightRule::new(Category::Comment, COMMENT)?,
            HighlightRule::new(Category::String, STRING)?,
            HighlightRule::keywords(Category::Keyword, NOTE_KEYWORDS)?,
            HighlightRule::keywords(Category::Type, NOTE_TYPES)?,
            HighlightRule::new(Category::Annotation, ANNOTATION)?,
        ],
    };
    Ok(RuleTable::new(rules))
}

impl RuleTable {
    /// The built-in table for `id`
    pub fn for_rule_set(id: RuleSetId) -> Self {
        match id {
            RuleSetId::Code => CODE_RULES.clone(),
            RuleSetId::Notes => NOTE_RULES.clone(),
        }
    }

    /// Copy of this table with `words` added to the keyword category
    pub fn with_extra_keywords(&self, words: &[String]) -> Result<Self, HighlightError> {
        let mut table = self.clone();
        let words: Vec<&str> = words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect();
        if !words.is_empty() {
            table.push(HighlightRule::keywords(Category::Keyword, words)?);
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(table: &RuleTable, source: &str) -> Vec<(String, Category)> {
        table
            .tokenize(source)
            .iter()
            .map(|t| (t.text(source).to_string(), t.category))
            .collect()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(RuleSetId::from_name("code"), Some(RuleSetId::Code));
        assert_eq!(RuleSetId::from_name("Notes"), Some(RuleSetId::Notes));
        assert_eq!(RuleSetId::from_name("java"), Some(RuleSetId::Code));
        assert_eq!(RuleSetId::from_name("python"), None);
        for id in RuleSetId::ALL {
            assert_eq!(RuleSetId::from_name(id.name()), Some(id));
            assert!(id.display_name().starts_with("Java ("));
        }
    }

    #[test]
    fn test_code_table_order() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        assert_eq!(
            table.categories(),
            vec![
                Category::Comment,
                Category::String,
                Category::Keyword,
                Category::Annotation,
                Category::Method,
                Category::Number,
            ]
        );
    }

    #[test]
    fn test_notes_table_order() {
        let table = RuleTable::for_rule_set(RuleSetId::Notes);
        assert_eq!(
            table.categories(),
            vec![
                Category::Comment,
                Category::String,
                Category::Keyword,
                Category::Type,
                Category::Annotation,
            ]
        );
    }

    #[test]
    fn test_method_wraps_identifier_only() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        assert_eq!(
            spans(&table, "list.add(x)"),
            vec![("add".to_string(), Category::Method)]
        );
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        let source = "/* first\n   second */ int";
        assert_eq!(
            spans(&table, source),
            vec![
                ("/* first\n   second */".to_string(), Category::Comment),
                ("int".to_string(), Category::Keyword),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_stays_plain() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        let source = "/* never closed\nclass";
        assert_eq!(
            spans(&table, source),
            vec![("class".to_string(), Category::Keyword)]
        );
    }

    #[test]
    fn test_string_does_not_cross_lines() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        assert!(spans(&table, "\"open\nclose\"")
            .iter()
            .all(|(_, c)| *c != Category::String));
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        let source = r#""say \"hi\"""#;
        assert_eq!(
            spans(&table, source),
            vec![(source.to_string(), Category::String)]
        );
    }

    #[test]
    fn test_notes_types() {
        let table = RuleTable::for_rule_set(RuleSetId::Notes);
        assert_eq!(
            spans(&table, "List<String> names"),
            vec![
                ("List".to_string(), Category::Type),
                ("String".to_string(), Category::Type),
            ]
        );
    }

    #[test]
    fn test_notes_has_no_numbers_or_methods() {
        let table = RuleTable::for_rule_set(RuleSetId::Notes);
        assert!(spans(&table, "run(42)").is_empty());
    }

    #[test]
    fn test_annotation() {
        let table = RuleTable::for_rule_set(RuleSetId::Code);
        assert_eq!(
            spans(&table, "@Override"),
            vec![("@Override".to_string(), Category::Annotation)]
        );
    }

    #[test]
    fn test_extra_keywords() {
        let table = RuleTable::for_rule_set(RuleSetId::Code)
            .with_extra_keywords(&["var".to_string(), " ".to_string(), "record".to_string()])
            .unwrap();
        assert_eq!(
            spans(&table, "var r = record"),
            vec![
                ("var".to_string(), Category::Keyword),
                ("record".to_string(), Category::Keyword),
            ]
        );
    }

    #[test]
    fn test_extra_keywords_empty_is_unchanged() {
        let base = RuleTable::for_rule_set(RuleSetId::Notes);
        let table = base.with_extra_keywords(&[]).unwrap();
        assert_eq!(table.len(), base.len());
    }
}
