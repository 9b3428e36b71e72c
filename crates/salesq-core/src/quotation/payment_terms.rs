//! Payment-terms extraction.
//!
//! This is the most markup-sensitive part of the pipeline: the terms live in
//! free-form paragraphs after a heading, mixed with signature prompts and
//! legal boilerplate. Extraction runs an ordered list of strategies and the
//! first non-empty result wins; everything found goes through the same
//! disclaimer stripping afterwards.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::dom::{element_text, has_class, next_element, text_with_line_breaks};
use super::rules::patterns::PAYMENT_DISCLAIMER;
use super::rules::text::clean_text;
use super::selectors;

/// Substituted when no payment terms survive extraction and sanitization:
/// a single upfront payment on signature.
pub const DEFAULT_PAYMENT_TERMS: &str = "1 Pago por adelantado a la firma";

/// Heading texts that mark the payment-terms block exactly.
const HEADING_LABELS: [&str; 3] = ["payment terms", "condiciones de pago", "términos de pago"];

/// Paragraphs containing any of these are signature/review UI boilerplate,
/// not terms.
const STOPWORDS: [&str; 4] = ["firmar", "sign", "opinión", "rechazar"];

/// Extract the raw payment-terms text, trying each strategy in order.
pub fn extract_payment_terms(document: &Html) -> Option<String> {
    let strategies: [(&str, fn(&Html) -> Option<String>); 2] =
        [("heading walk", heading_walk), ("section scan", section_scan)];

    for (label, strategy) in strategies {
        if let Some(text) = strategy(document) {
            debug!(strategy = label, "payment terms found");
            return Some(text);
        }
    }
    None
}

/// Strip the invoicing-upon-acceptance disclaimer wherever it appears, then
/// collapse blank-line runs and trim each line. Empty results count as
/// absent.
pub fn sanitize_payment_terms(raw: &str) -> Option<String> {
    let without_disclaimer = PAYMENT_DISCLAIMER.replace_all(raw, "\n");

    let normalized = without_disclaimer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

/// Primary strategy: a heading that exactly matches a known label, followed
/// by an `hr`, followed by the terms paragraphs.
fn heading_walk(document: &Html) -> Option<String> {
    for heading in document.select(&selectors::SECTION_TITLE) {
        let text = clean_text(&element_text(heading)).to_lowercase();
        if !HEADING_LABELS.contains(&text.as_str()) {
            continue;
        }

        // The terms body starts right after the separator under the heading.
        let Some(rule) = next_element(heading) else {
            continue;
        };
        if rule.value().name() != "hr" {
            continue;
        }

        let paragraphs = collect_paragraphs_after(rule);
        if !paragraphs.is_empty() {
            return Some(join_paragraphs(&paragraphs));
        }
    }
    None
}

/// Fallback strategy: any section whose heading mentions payment terms.
fn section_scan(document: &Html) -> Option<String> {
    for section in document.select(&selectors::SECTION) {
        let title = section
            .select(&selectors::SECTION_TITLE)
            .next()
            .map(|h| element_text(h).to_lowercase())
            .unwrap_or_default();
        if !title.contains("payment") && !title.contains("condiciones de pago") {
            continue;
        }

        let paragraphs: Vec<String> = section
            .select(&selectors::PARAGRAPH)
            .map(paragraph_text)
            .filter(|text| !text.is_empty() && !contains_stopword(text))
            .collect();
        if !paragraphs.is_empty() {
            return Some(join_paragraphs(&paragraphs));
        }
    }
    None
}

/// Walk following element siblings collecting paragraph text until a
/// terminating marker: another separator or heading, a section boundary, a
/// link, a button, or a modal container.
fn collect_paragraphs_after(rule: ElementRef<'_>) -> Vec<String> {
    let mut paragraphs = Vec::new();

    for sibling in rule.next_siblings().filter_map(ElementRef::wrap) {
        let name = sibling.value().name();
        if matches!(name, "hr" | "h4" | "section" | "a" | "button") || has_class(sibling, "modal") {
            break;
        }
        if name == "p" {
            let text = paragraph_text(sibling);
            if !text.is_empty() && !contains_stopword(&text) {
                paragraphs.push(text);
            }
        }
    }

    paragraphs
}

/// Paragraph text with `<br>` markers as newlines, each line normalized and
/// empty lines dropped.
fn paragraph_text(element: ElementRef<'_>) -> String {
    text_with_line_breaks(element)
        .lines()
        .map(clean_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn contains_stopword(text: &str) -> bool {
    let lowered = text.to_lowercase();
    STOPWORDS.iter().any(|word| lowered.contains(word))
}

/// Paragraphs ending in a period are joined with a newline, the rest with a
/// space.
fn join_paragraphs(paragraphs: &[String]) -> String {
    let mut result = String::new();
    for (i, paragraph) in paragraphs.iter().enumerate() {
        result.push_str(paragraph);
        if i + 1 < paragraphs.len() {
            result.push(if paragraph.ends_with('.') { '\n' } else { ' ' });
        }
    }
    result
}
