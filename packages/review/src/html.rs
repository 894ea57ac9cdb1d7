//! HTML utility functions for navigating and extracting text from parsed pages.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text content is never visible.
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Build a selector from a static CSS string.
#[allow(clippy::expect_used)] // Static selector strings that are guaranteed to be valid
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Parse a markup payload into a document tree.
pub fn parse_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Find the first element with the given tag name and `id` attribute.
///
/// # Examples
/// ```
/// use regelrecht_review::html::{find_by_id, parse_document};
///
/// let doc = parse_document(r#"<div id="a">x</div><div id="b">y</div>"#);
/// assert!(find_by_id(&doc, "div", "b").is_some());
/// assert!(find_by_id(&doc, "div", "c").is_none());
/// ```
pub fn find_by_id<'a>(doc: &'a Html, tag: &str, id: &str) -> Option<ElementRef<'a>> {
    doc.select(&selector(tag))
        .find(|element| element.value().id() == Some(id))
}

/// Collect the visible text of an element.
///
/// Every text fragment is trimmed, empty fragments are dropped and the rest
/// are joined with `separator`. Script and style content is skipped.
///
/// # Examples
/// ```
/// use regelrecht_review::html::{parse_document, stripped_text};
///
/// let doc = parse_document("<p> 一、 <b>本法</b>\n訂定之。 </p>");
/// let p = doc.root_element();
/// assert_eq!(stripped_text(p, ""), "一、本法訂定之。");
/// assert_eq!(stripped_text(p, "\n"), "一、\n本法\n訂定之。");
/// ```
pub fn stripped_text(element: ElementRef<'_>, separator: &str) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    for node in element.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .is_some_and(|name| INVISIBLE_ELEMENTS.contains(&name));
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed);
        }
    }

    fragments.join(separator)
}

/// Read a cell that holds text interleaved with `<br>` line breaks.
///
/// The inverse of rendering text with newlines converted to `<br>`.
pub fn text_with_line_breaks(element: ElementRef<'_>) -> String {
    let mut text = String::new();

    for child in element.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(e) if e.name() == "br" => text.push('\n'),
            Node::Element(_) => {
                if let Some(inner) = ElementRef::wrap(child) {
                    text.push_str(&text_with_line_breaks(inner));
                }
            }
            _ => {}
        }
    }

    text
}

/// Escape text for use as element content.
///
/// Matches how a browser serializes text nodes, so a document re-exported
/// by the viewer keeps the same bytes.
///
/// # Examples
/// ```
/// use regelrecht_review::html::escape_text;
///
/// assert_eq!(escape_text("a<b & \"c\" 'd'\u{a0}"), "a&lt;b &amp; \"c\" 'd'&nbsp;");
/// ```
pub fn escape_text(text: &str) -> String {
    escape_with(text, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\u{a0}' => Some("&nbsp;"),
        _ => None,
    })
}

/// Escape text for use in a double-quoted attribute value.
///
/// `<` and `>` are escaped as well, as current browsers do when serializing.
///
/// # Examples
/// ```
/// use regelrecht_review::html::escape_attribute;
///
/// assert_eq!(escape_attribute("見\"附件\" 'x'"), "見&quot;附件&quot; 'x'");
/// ```
pub fn escape_attribute(value: &str) -> String {
    escape_with(value, |c| match c {
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '\u{a0}' => Some("&nbsp;"),
        _ => None,
    })
}

fn escape_with(text: &str, entity: impl Fn(char) -> Option<&'static str>) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match entity(c) {
            Some(e) => escaped.push_str(e),
            None => escaped.push(c),
        }
    }
    escaped
}
