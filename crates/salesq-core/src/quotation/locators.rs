//! Label- and section-based field locators.

use scraper::{ElementRef, Html};
use tracing::trace;

use super::dom::{closest, element_text};
use super::rules::text::clean_text;
use super::selectors;

/// Locate the subscription-info table: the first table inside the closest
/// `div` around the `#sale_info_title` marker.
pub fn subscription_info_table(document: &Html) -> Option<ElementRef<'_>> {
    let marker = document.select(&selectors::SALE_INFO_TITLE).next()?;
    let container = closest(marker, "div")?;
    container.select(&selectors::TABLE).next()
}

/// Look up a labeled value in a key/value table.
///
/// Rows are scanned top to bottom; a row matches when its header cell's
/// normalized text starts with the label, case-insensitively ("Expiration
/// Date" matches label "Expiration"). The value is the first non-empty of
/// the cell's first `span`, first `em`, or the raw cell text. An empty value
/// counts as absent.
pub fn find_table_value(table: ElementRef<'_>, label: &str) -> Option<String> {
    let target = label.to_lowercase();

    for row in table.select(&selectors::TABLE_ROW) {
        let header = row
            .select(&selectors::ROW_HEADER)
            .next()
            .map(element_text)
            .unwrap_or_default();
        if !clean_text(&header).to_lowercase().starts_with(&target) {
            continue;
        }

        let value = row
            .select(&selectors::VALUE_SPAN)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
            .or_else(|| {
                row.select(&selectors::VALUE_EM)
                    .next()
                    .map(element_text)
                    .filter(|t| !t.is_empty())
            })
            .or_else(|| row.select(&selectors::VALUE_CELL).next().map(element_text))
            .unwrap_or_default();

        let cleaned = clean_text(&value);
        trace!(label, value = %cleaned, "matched table row");
        return if cleaned.is_empty() { None } else { Some(cleaned) };
    }

    None
}

/// Find the text of the first section whose heading contains the fragment
/// (case-insensitive substring match).
///
/// Returns the space-joined normalized paragraph texts, falling back to the
/// whole section's text when it holds no paragraphs.
pub fn find_section_text(document: &Html, title_fragment: &str) -> Option<String> {
    let target = title_fragment.to_lowercase();

    for section in document.select(&selectors::SECTION) {
        let title = section
            .select(&selectors::SECTION_TITLE)
            .next()
            .map(element_text)
            .unwrap_or_default();
        if !clean_text(&title).to_lowercase().contains(&target) {
            continue;
        }

        let paragraphs: Vec<String> = section
            .select(&selectors::PARAGRAPH)
            .map(|p| clean_text(&element_text(p)))
            .filter(|t| !t.is_empty())
            .collect();

        let joined = paragraphs.join(" ");
        return Some(if joined.is_empty() {
            clean_text(&element_text(section))
        } else {
            joined
        });
    }

    None
}
