//! Thin helpers over the HTML tree.
//!
//! The extraction code needs three primitives: descendant queries, a node's
//! own and parent text, and sibling walks in document order. Everything else
//! stays in pure text rules, so the tree library never leaks into the data
//! model.

use scraper::{ElementRef, Node};

use super::rules::amounts::{monetary_parts, MonetaryParts};

/// Concatenated text of an element's descendants.
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Text of the element's immediate parent, empty when the parent is not an
/// element.
pub fn parent_text(element: ElementRef<'_>) -> String {
    element
        .parent()
        .and_then(ElementRef::wrap)
        .map(element_text)
        .unwrap_or_default()
}

/// The first following sibling that is an element.
pub fn next_element(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

/// The element itself if it has the given tag name, else its nearest
/// ancestor with that name.
pub fn closest<'a>(element: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    if element.value().name() == name {
        return Some(element);
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == name)
}

/// Element text with `<br>` markers converted to newline characters.
pub fn text_with_line_breaks(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Whether the element carries the given class.
pub fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Monetary parts of an optional currency-value node, preferring the parent
/// node's text for display and symbol detection.
pub fn monetary_parts_of(element: Option<ElementRef<'_>>) -> MonetaryParts {
    match element {
        Some(el) => monetary_parts(&element_text(el), &parent_text(el)),
        None => MonetaryParts::default(),
    }
}
