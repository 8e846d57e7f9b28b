//! Extraction of the English etymology section from rendered page HTML.
//!
//! The walk:
//!
//! 1. Find the `h2` for the English language section. Both current markup
//!    (`<h2 id="English">`) and the older headline-span markup
//!    (`<h2><span class="mw-headline" id="English">`) are recognised.
//! 2. In document order, find the first `h3`/`h4` whose text starts with
//!    "Etymology" (so "Etymology 1" matches), giving up at the next `h2`.
//! 3. From the heading (or its `div.mw-heading` wrapper) collect following
//!    sibling `<p>` blocks until a sibling that is, or contains, a section
//!    heading.
//! 4. Inside each paragraph, `span.etyl a` links name origin languages.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::EtymologyResult;

static H2: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static ENGLISH_ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("#English"));
static ETYL_LINK: LazyLock<Selector> = LazyLock::new(|| selector("span.etyl a"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Text and languages gathered from one etymology section.
#[derive(Debug, Default)]
struct Section {
    paragraphs: Vec<String>,
    languages: Vec<String>,
}

/// Parse rendered page HTML into an etymology outcome for `word`.
///
/// Never returns [`EtymologyResult::Error`]: malformed or unexpected
/// markup simply yields `NotFound`.
pub fn parse_etymology(word: &str, html: &str) -> EtymologyResult {
    let document = Html::parse_fragment(html);

    let Some(english) = find_english_heading(&document) else {
        return EtymologyResult::not_found(word, format!("No English entry found for '{word}'"));
    };

    let Some(heading) = find_etymology_heading(&document, english) else {
        return EtymologyResult::not_found(
            word,
            format!("No etymology section found for '{word}'"),
        );
    };

    let section = collect_section(heading);
    let text = section.paragraphs.join("\n");
    if text.is_empty() {
        return EtymologyResult::not_found(
            word,
            format!("Etymology section exists but contains no text for '{word}'"),
        );
    }

    EtymologyResult::Success {
        word: word.to_string(),
        text,
        origin_languages: section.languages,
    }
}

fn find_english_heading(document: &Html) -> Option<ElementRef<'_>> {
    document.select(&H2).find(|h2| {
        h2.value().id() == Some("English") || h2.select(&ENGLISH_ANCHOR).next().is_some()
    })
}

fn find_etymology_heading<'a>(
    document: &'a Html,
    english: ElementRef<'a>,
) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .skip_while(|node| node.id() != english.id())
        .skip(1)
        .filter_map(ElementRef::wrap)
        // Nodes inside the English heading itself are not section headings.
        .filter(|el| !el.ancestors().any(|a| a.id() == english.id()))
        .take_while(|el| el.value().name() != "h2")
        .find(|el| is_subheading(el) && heading_text(el).starts_with("Etymology"))
}

fn collect_section(heading: ElementRef<'_>) -> Section {
    // Current markup wraps each heading in `<div class="mw-heading">`; the
    // section content is a sibling of that wrapper, not of the heading.
    let anchor = heading
        .parent()
        .and_then(ElementRef::wrap)
        .filter(|parent| parent.value().classes().any(|c| c == "mw-heading"))
        .unwrap_or(heading);

    let mut section = Section::default();
    for sibling in anchor.next_siblings().filter_map(ElementRef::wrap) {
        let name = sibling.value().name();
        if matches!(name, "div" | "h2" | "h3" | "h4") && contains_heading(sibling) {
            break;
        }
        if name != "p" {
            continue;
        }

        let text = paragraph_text(sibling);
        if !text.is_empty() {
            section.paragraphs.push(text);
        }
        for link in sibling.select(&ETYL_LINK) {
            let language = link.text().collect::<String>().trim().to_string();
            if !language.is_empty() && !section.languages.contains(&language) {
                section.languages.push(language);
            }
        }
    }
    section
}

fn is_subheading(el: &ElementRef<'_>) -> bool {
    matches!(el.value().name(), "h3" | "h4")
}

/// Whether `el` is a section heading or has one among its descendants.
fn contains_heading(el: ElementRef<'_>) -> bool {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .any(|e| matches!(e.value().name(), "h2" | "h3" | "h4"))
}

fn heading_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Visible text of a paragraph: trimmed text runs joined by single spaces.
fn paragraph_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
