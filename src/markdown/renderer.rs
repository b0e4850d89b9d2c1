//! Note rendering using pulldown-cmark
//!
//! Code blocks and inline code go through a highlight [`RuleTable`]; the
//! resulting HTML then gets the note stylesheet's classes. Excerpts are
//! plain text taken from the same event stream; escape them before use in
//! HTML.

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

use crate::syntax::RuleTable;

/// Class decorations applied to rendered note HTML
const DECORATIONS: &[(&str, &str)] = &[
    ("<h3>", r#"<h3 class="note-section-title">"#),
    ("<h4>", r#"<h4 class="note-subtitle">"#),
    ("<ul>", r#"<ul class="note-list">"#),
    ("<ol>", r#"<ol class="note-list">"#),
    ("<ol start=", r#"<ol class="note-list" start="#),
];

/// Render a note body (Markdown) to HTML with highlighted code
pub fn render_note(markdown: &str, rules: &RuleTable) -> String {
    let parser = Parser::new_ext(markdown, note_options());
    let events = highlight_code(parser, rules);

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    decorate(&html_output)
}

fn note_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// Plain-text excerpt of a note body (unescaped)
pub fn note_excerpt(markdown: &str, length: usize) -> String {
    excerpt(&plain_text(markdown), length)
}

/// Text and code of a note, with block boundaries turned into spaces
///
/// Raw HTML in the note is dropped.
pub fn plain_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new_ext(markdown, note_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::CodeBlock)
            | Event::End(TagEnd::BlockQuote(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::TableCell) => text.push(' '),
            _ => {}
        }
    }
    text
}

/// Collapse whitespace and cut to `length` characters
pub fn excerpt(text: &str, length: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() > length {
        let cut: String = text.chars().take(length).collect();
        format!("{}...", cut)
    } else {
        text
    }
}

/// Replace code events with pre-highlighted HTML
fn highlight_code<'a>(parser: Parser<'a>, rules: &RuleTable) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut code_block: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => code_block = Some(String::new()),
            Event::End(TagEnd::CodeBlock) => {
                let code = code_block.take().unwrap_or_default();
                let code = code.strip_suffix('\n').unwrap_or(&code);
                events.push(Event::Html(
                    format!(
                        "<pre class=\"note-code\"><code>{}</code></pre>\n",
                        rules.highlight(code)
                    )
                    .into(),
                ));
            }
            Event::Text(text) => match code_block.as_mut() {
                Some(buffer) => buffer.push_str(&text),
                None => events.push(Event::Text(text)),
            },
            Event::Code(code) => events.push(Event::InlineHtml(
                format!("<code>{}</code>", rules.highlight(&code)).into(),
            )),
            other => events.push(other),
        }
    }

    events
}

fn decorate(html: &str) -> String {
    DECORATIONS
        .iter()
        .fold(html.to_string(), |acc, (from, to)| acc.replace(from, to))
}
