//! HTML page templates
//!
//! Every page is a complete document linking `style.css`. `depth` is how
//! many directories below the site root a page lives, for relative links.

use crate::catalog::{Note, Program, Topic};
use crate::markdown::{note_excerpt, render_note};
use crate::syntax::{escape_html, RuleTable};

/// Client-side card filtering: search box (300ms debounce) plus category buttons
const FILTER_JS: &str = r#"
(function () {
    const input = document.getElementById('searchInput');
    const buttons = document.querySelectorAll('.category-btn');
    const cards = document.querySelectorAll('.program-card, .note-card');
    const count = document.getElementById('fileCount');
    let category = 'all';
    let timeout = null;

    function apply() {
        const term = input ? input.value.toLowerCase() : '';
        let shown = 0;
        cards.forEach(function (card) {
            const title = card.querySelector('h3').textContent.toLowerCase();
            const body = card.querySelector('p, .note-excerpt');
            const text = body ? body.textContent.toLowerCase() : '';
            const inCategory = category === 'all' || card.dataset.category === category;
            const visible = inCategory && (title.includes(term) || text.includes(term));
            card.style.display = visible ? '' : 'none';
            if (visible) shown++;
        });
        if (count) count.textContent = shown;
    }

    if (input) {
        input.addEventListener('input', function () {
            clearTimeout(timeout);
            timeout = setTimeout(apply, 300);
        });
    }

    buttons.forEach(function (btn) {
        btn.addEventListener('click', function () {
            buttons.forEach(function (b) { b.classList.remove('active'); });
            btn.classList.add('active');
            category = btn.dataset.category;
            apply();
        });
    });
})();
"#;

fn prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Wrap `body` in the site layout
pub fn layout(site_title: &str, page_title: &str, depth: usize, body: &str) -> String {
    let root = prefix(depth);
    let title = if page_title.is_empty() {
        escape_html(site_title)
    } else {
        format!("{} · {}", escape_html(page_title), escape_html(site_title))
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="{root}style.css">
</head>
<body>
<header class="site-header">
    <h1><a href="{root}index.html">{site_title}</a></h1>
    <nav>
        <a href="{root}index.html">Programs</a>
        <a href="{root}notes.html">Notes</a>
    </nav>
</header>
<main>
{body}
</main>
</body>
</html>
"#,
        title = title,
        root = root,
        site_title = escape_html(site_title),
        body = body,
    )
}

fn category_buttons<'a>(categories: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let mut html =
        String::from(r#"<button class="category-btn active" data-category="all">All</button>"#);
    for (id, label) in categories {
        html.push_str(&format!(
            "\n        <button class=\"category-btn\" data-category=\"{}\">{}</button>",
            escape_html(id),
            escape_html(&label)
        ));
    }
    html
}

fn search_section(placeholder: &str, buttons: &str) -> String {
    format!(
        r#"<section class="search-section">
    <input id="searchInput" class="search-input" type="search" placeholder="{}" autocomplete="off">
    <div class="category-filters">
        {}
    </div>
</section>"#,
        escape_html(placeholder),
        buttons
    )
}

/// Path of a program's raw source under the site root
pub fn download_path(program: &Program) -> String {
    let safe: Vec<&str> = program
        .filename
        .split('/')
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .collect();
    format!("downloads/{}", safe.join("/"))
}

/// Path of a program's viewer page under the site root
pub fn program_page_path(program: &Program) -> String {
    format!("programs/{}.html", program.slug)
}

/// Path of a note's page under the site root
pub fn note_page_path(note: &Note) -> String {
    format!("notes/{}.html", note.id)
}

fn program_card(program: &Program) -> String {
    format!(
        r#"<div class="program-card" data-category="{category}">
    <span class="category">{category_upper}</span>
    <h3>{title}</h3>
    <p>{description}</p>
    <div class="program-actions">
        <a class="btn-view" href="{page}">View Code</a>
        <a class="btn-download" href="{download}" download>Download</a>
    </div>
    <div class="file-info">
        <small>File: {filename}</small>
    </div>
</div>"#,
        category = program.category.as_str(),
        category_upper = program.category.as_str().to_uppercase(),
        title = escape_html(&program.title),
        description = escape_html(&program.description),
        page = escape_html(&program_page_path(program)),
        download = escape_html(&download_path(program)),
        filename = escape_html(&program.filename),
    )
}

/// Program listing (`index.html`)
pub fn index_page(site_title: &str, programs: &[Program]) -> String {
    let topics: Vec<Topic> = Topic::ALL
        .into_iter()
        .filter(|topic| programs.iter().any(|p| p.category == *topic))
        .collect();
    let buttons = category_buttons(
        topics
            .iter()
            .map(|topic| (topic.as_str(), topic.label().to_string())),
    );

    let cards = if programs.is_empty() {
        r#"<p class="empty">No programs found.</p>"#.to_string()
    } else {
        programs
            .iter()
            .map(program_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"{search}
<p class="file-count"><span id="fileCount">{count}</span> programs</p>
<div id="programsGrid" class="grid">
{cards}
</div>
<script>{script}</script>"#,
        search = search_section("Search programs...", &buttons),
        count = programs.len(),
        cards = cards,
        script = FILTER_JS,
    );

    layout(site_title, "", 0, &body)
}

/// Line-number gutter, only for code with more than one line
fn line_numbers(line_count: usize) -> String {
    if line_count <= 1 {
        return String::new();
    }
    let mut html = String::from(r#"<div class="line-numbers">"#);
    for n in 1..=line_count {
        html.push_str(&format!(r#"<div class="line-number">{}</div>"#, n));
    }
    html.push_str("</div>");
    html
}

/// Code viewer page for one program (lives under `programs/`)
pub fn program_page(site_title: &str, program: &Program, rules: &RuleTable) -> String {
    let body = format!(
        r#"<article class="viewer">
<header class="viewer-header">
    <h2 id="modalTitle">{title}</h2>
    <span id="fileName" class="file-name">{filename}</span>
    <a id="downloadCode" class="btn-download" href="../{download}" download>Download</a>
</header>
<p>{description}</p>
<div class="code-container">{gutter}<pre class="code"><code id="modalCode">{code}</code></pre></div>
</article>"#,
        title = escape_html(&program.title),
        filename = escape_html(&program.filename),
        download = escape_html(&download_path(program)),
        description = escape_html(&program.description),
        gutter = line_numbers(program.line_count()),
        code = rules.highlight(&program.code),
    );

    layout(site_title, &program.title, 1, &body)
}

fn note_card(note: &Note, excerpt_length: usize) -> String {
    format!(
        r#"<div class="note-card" data-category="{category}">
    <div class="note-header">
        <span class="note-category">{category_upper}</span>
        <span class="note-date">{date}</span>
    </div>
    <h3>{title}</h3>
    <div class="note-excerpt">{excerpt}</div>
    <div class="note-actions">
        <a class="btn-view-note" href="{page}">Read More</a>
    </div>
</div>"#,
        category = escape_html(&note.category),
        category_upper = escape_html(&note.category.to_uppercase()),
        date = note.display_date(),
        title = escape_html(&note.title),
        excerpt = escape_html(&note_excerpt(&note.content, excerpt_length)),
        page = escape_html(&note_page_path(note)),
    )
}

/// Note listing (`notes.html`)
pub fn notes_page(site_title: &str, notes: &[Note], excerpt_length: usize) -> String {
    let mut categories: Vec<&str> = Vec::new();
    for note in notes {
        if !categories.contains(&note.category.as_str()) {
            categories.push(&note.category);
        }
    }
    let buttons = category_buttons(categories.iter().map(|c| (*c, title_case(c))));

    let cards = if notes.is_empty() {
        r#"<p class="empty">No notes found.</p>"#.to_string()
    } else {
        notes
            .iter()
            .map(|note| note_card(note, excerpt_length))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let body = format!(
        r#"{search}
<p class="file-count"><span id="fileCount">{count}</span> notes</p>
<div id="notesGrid" class="grid">
{cards}
</div>
<script>{script}</script>"#,
        search = search_section("Search notes...", &buttons),
        count = notes.len(),
        cards = cards,
        script = FILTER_JS,
    );

    layout(site_title, "Notes", 0, &body)
}

/// Full note page (lives under `notes/`)
pub fn note_page(site_title: &str, note: &Note, rules: &RuleTable) -> String {
    let body = format!(
        r#"<article class="note">
<h2 id="noteModalTitle">{title}</h2>
<div class="note-meta">{category} · Updated {date}</div>
<div id="noteModalContent" class="note-content">
{content}
</div>
</article>"#,
        title = escape_html(&note.title),
        category = escape_html(&note.category.to_uppercase()),
        date = note.display_date(),
        content = render_note(&note.content, rules),
    );

    layout(site_title, &note.title, 1, &body)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::RuleSetId;

    #[test]
    fn test_line_numbers_only_for_multiline() {
        assert_eq!(line_numbers(1), "");
        let gutter = line_numbers(3);
        assert_eq!(gutter.matches("line-number\"").count(), 3);
        assert!(gutter.contains(">3</div>"));
    }

    #[test]
    fn test_download_path_drops_parent_components() {
        let program = Program::new(1, "../../etc/Evil.java", "");
        assert_eq!(download_path(&program), "downloads/etc/Evil.java");
        let program = Program::new(2, "OOP/Inheritance.java", "");
        assert_eq!(download_path(&program), "downloads/OOP/Inheritance.java");
    }

    #[test]
    fn test_layout_depth_prefixes_links() {
        let html = layout("Site", "Page", 1, "<p>x</p>");
        assert!(html.contains(r#"href="../style.css""#));
        assert!(html.contains("<title>Page · Site</title>"));
    }

    #[test]
    fn test_program_card_escapes_text() {
        let program = Program::new(1, "Tags.java", "// Uses <generics> & more\n");
        let card = program_card(&program);
        assert!(card.contains("Uses &lt;generics&gt; &amp; more"));
        assert!(card.contains(r#"data-category="basic""#));
        assert!(card.contains("BASIC"));
    }

    #[test]
    fn test_index_only_lists_present_topics() {
        let programs = vec![Program::new(1, "Loops.java", "")];
        let html = index_page("Site", &programs);
        assert!(html.contains(r#"data-category="loops">Loops</button>"#));
        assert!(!html.contains(r#"data-category="oop">"#));
    }

    #[test]
    fn test_empty_index() {
        let html = index_page("Site", &[]);
        assert!(html.contains("No programs found."));
    }

    #[test]
    fn test_program_page_highlights_code() {
        let program = Program::new(1, "A.java", "int x = 42;\nint y = 7;");
        let html = program_page("Site", &program, &RuleTable::for_rule_set(RuleSetId::Code));
        assert!(html.contains(r#"<span class="code-number">42</span>"#));
        assert!(html.contains(r#"class="line-numbers""#));
        assert!(html.contains(r#"href="../downloads/A.java""#));
    }

    #[test]
    fn test_note_card_escapes_excerpt() {
        let note = crate::catalog::parse_note(
            1,
            std::path::Path::new("ops.md"),
            "---\ntitle: Ops\ncategory: basics\nupdated: 2024-01-01\n---\nUse `a < b` & `c > d` freely\n",
        )
        .unwrap();
        let card = note_card(&note, 12);
        assert!(card.contains(r#"<div class="note-excerpt">Use a &lt; b &amp; ...</div>"#));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("oop"), "Oop");
        assert_eq!(title_case(""), "");
    }
}
