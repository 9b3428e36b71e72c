//! Product-row extraction from the quotation's order table.

use scraper::{ElementRef, Html};
use tracing::debug;

use super::dom::{element_text, monetary_parts_of};
use super::rules::amounts::parse_localized_amount;
use super::rules::text::clean_text;
use super::selectors;
use crate::models::quotation::LineItem;

/// Extract all product line items, preserving document order.
///
/// Rows whose product name is empty are dropped. Every other field degrades
/// to `None` when its markup is missing or unparsable.
pub fn extract_line_items(document: &Html) -> Vec<LineItem> {
    let items: Vec<LineItem> = document
        .select(&selectors::PRODUCT_ROWS)
        .filter_map(parse_row)
        .collect();

    debug!(count = items.len(), "extracted product lines");
    items
}

fn parse_row(row: ElementRef<'_>) -> Option<LineItem> {
    let name = clean_text(
        &row.select(&selectors::PRODUCT_NAME)
            .next()
            .map(element_text)
            .unwrap_or_default(),
    );
    if name.is_empty() {
        debug!("dropping product row without a name");
        return None;
    }

    // Quantity is rendered as two adjacent spans: numeric value, unit label.
    let spans: Vec<ElementRef<'_>> = row.select(&selectors::QUANTITY_SPANS).collect();
    let quantity_value = spans
        .first()
        .and_then(|span| parse_localized_amount(&element_text(*span)));
    let quantity_display = {
        let parts: Vec<String> = spans
            .iter()
            .take(2)
            .map(|span| clean_text(&element_text(*span)))
            .filter(|t| !t.is_empty())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    };

    let unit_price = monetary_parts_of(row.select(&selectors::UNIT_PRICE_VALUE).next());
    let amount = monetary_parts_of(row.select(&selectors::SUBTOTAL_VALUE).next());
    let currency_symbol = amount.symbol.clone().or_else(|| unit_price.symbol.clone());

    Some(LineItem {
        name,
        quantity_value,
        quantity_display,
        unit_price_text: unit_price.text,
        unit_price_value: unit_price.value,
        amount_text: amount.text,
        amount_value: amount.value,
        currency_symbol,
    })
}
