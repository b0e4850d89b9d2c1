//! Theme system for generated sites
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/brewbook/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::syntax::Category;

// Embed theme YAML files at compile time
pub const CLASSIC_LIGHT_YAML: &str = include_str!("../themes/classic-light.yaml");
pub const GITHUB_DARK_YAML: &str = include_str!("../themes/github-dark.yaml");

/// Theme used when the config names none
pub const DEFAULT_THEME_ID: &str = "classic-light";

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "classic-light")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "classic-light",
        yaml: CLASSIC_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "github-dark",
        yaml: GITHUB_DARK_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/brewbook/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "classic-light", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Classic Light")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Theme(format!(
            "Failed to read theme file {}: {}",
            path.display(),
            e
        ))
    })?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme> {
    if let Some(user_dir) = crate::config_paths::themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::debug!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List all available themes from all sources
///
/// User themes override builtins with the same id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Some(user_dir) = crate::config_paths::themes_dir() {
        if let Ok(entries) = std::fs::read_dir(&user_dir) {
            let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
            paths.sort();
            for path in paths {
                if !path
                    .extension()
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
                {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    if seen_ids.insert(id.to_string()) {
                        let name = from_file(&path)
                            .map(|t| t.name)
                            .unwrap_or_else(|_| id.to_string());
                        themes.push(ThemeInfo {
                            id: id.to_string(),
                            name,
                            source: ThemeSource::User,
                        });
                    }
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> std::result::Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// CSS hex notation, with alpha only when not opaque
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub page: PageThemeData,
    #[serde(default)]
    pub syntax: SyntaxThemeData,
}

/// Page colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct PageThemeData {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub card_background: String,
    pub border: String,
    pub muted: String,
    pub code_background: String,
    pub code_foreground: String,
}

/// Highlight colors, one per category (all optional)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SyntaxThemeData {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default, rename = "type")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub annotation: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub page: PageTheme,
    pub syntax: SyntaxTheme,
}

/// Page colors (resolved)
#[derive(Debug, Clone)]
pub struct PageTheme {
    pub background: Color,
    pub foreground: Color,
    /// Links, buttons, headings
    pub accent: Color,
    pub card_background: Color,
    pub border: Color,
    /// Secondary text (dates, file names)
    pub muted: Color,
    /// Viewer surface behind highlighted code
    pub code_background: Color,
    /// Plain (unhighlighted) code text
    pub code_foreground: Color,
}

/// Highlight colors (resolved)
#[derive(Debug, Clone)]
pub struct SyntaxTheme {
    pub comment: Color,
    pub string: Color,
    pub keyword: Color,
    pub type_name: Color,
    pub annotation: Color,
    pub method: Color,
    pub number: Color,
}

impl SyntaxTheme {
    pub fn default_dark() -> Self {
        Self {
            comment: Color::rgb(0x6A, 0x99, 0x55),
            string: Color::rgb(0xCE, 0x91, 0x78),
            keyword: Color::rgb(0x56, 0x9C, 0xD6),
            type_name: Color::rgb(0x4E, 0xC9, 0xB0),
            annotation: Color::rgb(0xDC, 0xDC, 0xAA),
            method: Color::rgb(0xDC, 0xDC, 0xAA),
            number: Color::rgb(0xB5, 0xCE, 0xA8),
        }
    }

    pub fn color_for(&self, category: Category) -> Color {
        match category {
            Category::Comment => self.comment,
            Category::String => self.string,
            Category::Keyword => self.keyword,
            Category::Type => self.type_name,
            Category::Annotation => self.annotation,
            Category::Method => self.method,
            Category::Number => self.number,
        }
    }
}

fn optional_color(value: &Option<String>, fallback: Color) -> std::result::Result<Color, String> {
    value
        .as_ref()
        .map(|s| Color::from_hex(s))
        .transpose()
        .map(|c| c.unwrap_or(fallback))
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: ThemeData = serde_yaml::from_str(yaml)
            .map_err(|e| Error::Theme(format!("YAML parse error: {}", e)))?;
        Self::from_data(data).map_err(Error::Theme)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::Theme(format!("Unknown theme id: {}", id)))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> std::result::Result<Self, String> {
        let page = &data.page;
        let syntax = &data.syntax;
        let defaults = SyntaxTheme::default_dark();

        Ok(Theme {
            name: data.name,
            page: PageTheme {
                background: Color::from_hex(&page.background)?,
                foreground: Color::from_hex(&page.foreground)?,
                accent: Color::from_hex(&page.accent)?,
                card_background: Color::from_hex(&page.card_background)?,
                border: Color::from_hex(&page.border)?,
                muted: Color::from_hex(&page.muted)?,
                code_background: Color::from_hex(&page.code_background)?,
                code_foreground: Color::from_hex(&page.code_foreground)?,
            },
            syntax: SyntaxTheme {
                comment: optional_color(&syntax.comment, defaults.comment)?,
                string: optional_color(&syntax.string, defaults.string)?,
                keyword: optional_color(&syntax.keyword, defaults.keyword)?,
                type_name: optional_color(&syntax.type_name, defaults.type_name)?,
                annotation: optional_color(&syntax.annotation, defaults.annotation)?,
                method: optional_color(&syntax.method, defaults.method)?,
                number: optional_color(&syntax.number, defaults.number)?,
            },
        })
    }

    /// Default theme (YAML-backed with Rust fallback)
    pub fn classic_light() -> Self {
        match Theme::from_yaml(CLASSIC_LIGHT_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Classic Light".to_string(),
                page: PageTheme {
                    background: Color::rgb(0xF8, 0xFA, 0xFC),
                    foreground: Color::rgb(0x1F, 0x29, 0x37),
                    accent: Color::rgb(0x25, 0x63, 0xEB),
                    card_background: Color::rgb(0xFF, 0xFF, 0xFF),
                    border: Color::rgb(0xE5, 0xE7, 0xEB),
                    muted: Color::rgb(0x6B, 0x72, 0x80),
                    code_background: Color::rgb(0x1E, 0x29, 0x3B),
                    code_foreground: Color::rgb(0xE2, 0xE8, 0xF0),
                },
                syntax: SyntaxTheme::default_dark(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_syntax_colors_fall_back() {
        let yaml = r##"
version: 1
name: "Sparse"
page:
  background: "#000000"
  foreground: "#FFFFFF"
  accent: "#FF0000"
  card_background: "#111111"
  border: "#222222"
  muted: "#333333"
  code_background: "#000000"
  code_foreground: "#FFFFFF"
syntax:
  keyword: "#123456"
"##;
        let theme = Theme::from_yaml(yaml).unwrap();
        assert_eq!(theme.syntax.keyword, Color::rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.syntax.comment, SyntaxTheme::default_dark().comment);
    }

    #[test]
    fn test_bad_color_is_theme_error() {
        let yaml = CLASSIC_LIGHT_YAML.replace("#2563EB", "#25GG");
        let err = Theme::from_yaml(&yaml).unwrap_err();
        assert!(matches!(err, Error::Theme(_)));
    }

    #[test]
    fn test_color_for_each_category() {
        let syntax = SyntaxTheme::default_dark();
        assert_eq!(syntax.color_for(Category::Keyword), syntax.keyword);
        assert_eq!(syntax.color_for(Category::Type), syntax.type_name);
        assert_eq!(syntax.color_for(Category::Number), syntax.number);
    }
}
