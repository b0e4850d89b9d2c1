//! Stylesheet generation from theme colors

use crate::syntax::CATEGORY_ORDER;
use crate::theme::Theme;

/// Generate `style.css` for `theme`
pub fn generate_css(theme: &Theme) -> String {
    let page = &theme.page;
    let mut css = format!(
        r#"* {{
    box-sizing: border-box;
}}

body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.6;
    color: {foreground};
    background: {background};
    margin: 0;
}}

a {{
    color: {accent};
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

.site-header {{
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 16px 32px;
    border-bottom: 1px solid {border};
    background: {card_background};
}}

.site-header h1 {{
    font-size: 1.4em;
    margin: 0;
}}

.site-header nav a {{
    margin-left: 20px;
    font-weight: 600;
}}

main {{
    max-width: 1100px;
    margin: 0 auto;
    padding: 24px 32px;
}}

.search-section {{
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
    align-items: center;
    margin-bottom: 16px;
}}

.search-input {{
    flex: 1 1 280px;
    padding: 10px 14px;
    border: 1px solid {border};
    border-radius: 6px;
    background: {card_background};
    color: {foreground};
}}

.category-btn {{
    padding: 6px 14px;
    border: 1px solid {border};
    border-radius: 999px;
    background: {card_background};
    color: {foreground};
    cursor: pointer;
}}

.category-btn.active {{
    background: {accent};
    border-color: {accent};
    color: #ffffff;
}}

.file-count {{
    color: {muted};
}}

.grid {{
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 20px;
}}

.program-card, .note-card {{
    background: {card_background};
    border: 1px solid {border};
    border-radius: 8px;
    padding: 20px;
}}

.program-card h3, .note-card h3 {{
    margin: 8px 0;
}}

.category, .note-category {{
    font-size: 0.75em;
    font-weight: 700;
    letter-spacing: 0.05em;
    color: {accent};
}}

.note-header {{
    display: flex;
    justify-content: space-between;
}}

.note-date, .file-info, .file-name, .note-meta {{
    color: {muted};
}}

.program-actions, .note-actions {{
    display: flex;
    gap: 12px;
    margin: 12px 0 8px;
}}

.btn-view, .btn-download, .btn-view-note {{
    padding: 6px 12px;
    border: 1px solid {accent};
    border-radius: 6px;
}}

.viewer-header {{
    display: flex;
    align-items: baseline;
    gap: 16px;
    flex-wrap: wrap;
}}

.code-container {{
    display: flex;
    background: {code_background};
    color: {code_foreground};
    border-radius: 8px;
    overflow-x: auto;
}}

.line-numbers {{
    padding: 16px 8px;
    text-align: right;
    color: {muted};
    user-select: none;
    border-right: 1px solid {border};
}}

.line-number, pre.code, .note-code {{
    font-family: "SF Mono", "Fira Code", Consolas, "Liberation Mono", Menlo, Courier, monospace;
    font-size: 0.9em;
    line-height: 1.5;
}}

pre.code {{
    margin: 0;
    padding: 16px;
}}

.note-content .note-code {{
    background: {code_background};
    color: {code_foreground};
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
}}

.note-section-title {{
    color: {accent};
}}

.note-list {{
    padding-left: 2em;
}}

.empty {{
    color: {muted};
}}
"#,
        foreground = page.foreground.to_css(),
        background = page.background.to_css(),
        accent = page.accent.to_css(),
        card_background = page.card_background.to_css(),
        border = page.border.to_css(),
        muted = page.muted.to_css(),
        code_background = page.code_background.to_css(),
        code_foreground = page.code_foreground.to_css(),
    );

    for category in CATEGORY_ORDER {
        css.push_str(&format!(
            "\n.{} {{\n    color: {};\n}}\n",
            category.css_class(),
            theme.syntax.color_for(category).to_css()
        ));
    }
    css.push_str("\n.code-comment {\n    font-style: italic;\n}\n");

    css
}
