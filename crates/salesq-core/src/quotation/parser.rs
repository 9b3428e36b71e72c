//! Quotation assembler: combines the extractors into one structured record.

use std::time::Instant;

use scraper::Html;
use tracing::{debug, info, warn};

use crate::error::ExtractionError;
use crate::models::quotation::{LineItem, QuotationRecord, SavingsEntry};

use super::dom::monetary_parts_of;
use super::line_items::extract_line_items;
use super::locators::{find_table_value, subscription_info_table};
use super::payment_terms::{extract_payment_terms, sanitize_payment_terms, DEFAULT_PAYMENT_TERMS};
use super::rules::amounts::format_currency_value;
use super::rules::duration::derive_duration;
use super::selectors;
use super::{QuotationExtractor, Result};

/// Result of extracting one quotation document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The assembled record.
    pub record: QuotationRecord,
    /// Non-fatal extraction misses.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Assembles a [`QuotationRecord`] from quotation HTML.
///
/// Stateless; a single parser can be reused across documents and shared
/// between threads.
pub struct QuotationParser {
    /// Currency symbol used when none is detected in the document.
    default_currency: String,
    /// Terms substituted when the document yields none.
    default_payment_terms: String,
}

impl QuotationParser {
    /// Create a parser with the standard defaults ("€", upfront payment).
    pub fn new() -> Self {
        Self {
            default_currency: "€".to_string(),
            default_payment_terms: DEFAULT_PAYMENT_TERMS.to_string(),
        }
    }

    /// Set the fallback currency symbol.
    pub fn with_default_currency(mut self, symbol: impl Into<String>) -> Self {
        self.default_currency = symbol.into();
        self
    }

    /// Set the fallback payment terms.
    pub fn with_default_payment_terms(mut self, terms: impl Into<String>) -> Self {
        self.default_payment_terms = terms.into();
        self
    }

    /// Parse one quotation document.
    ///
    /// `source_url` is echoed verbatim into the record's call-to-action
    /// field; `index` is the document's 1-based ordinal, used only for the
    /// placeholder title. Fails only when no product lines are found.
    pub fn parse(&self, html: &str, source_url: &str, index: usize) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!(index, bytes = html.len(), "parsing quotation document");
        let document = Html::parse_document(html);

        // Subscription metadata by labeled lookup.
        let info_table = subscription_info_table(&document);
        if info_table.is_none() {
            warnings.push("subscription info table not found".to_string());
        }
        let lookup = |label: &str| info_table.and_then(|table| find_table_value(table, label));

        let plan_label = lookup("Plan");
        let order_name = lookup("Order");
        let order_date = lookup("Date");
        let expiration_date = lookup("Expiration");
        let reference = lookup("Reference");
        debug!(?plan_label, ?order_name, ?reference, "subscription fields");

        // Grand total; its symbol becomes the record-wide fallback currency.
        let total = monetary_parts_of(document.select(&selectors::TOTALS_VALUE).next());
        if total.text.is_none() {
            warnings.push("grand total not found".to_string());
        }
        let fallback_currency = total
            .symbol
            .clone()
            .unwrap_or_else(|| self.default_currency.clone());

        let line_items = extract_line_items(&document);
        if line_items.is_empty() {
            warn!(index, "no product lines found");
            return Err(ExtractionError::NoLineItems);
        }

        // Positive lines are the offering, negative lines are discounts;
        // zero-amount lines belong to neither.
        let charge_lines: Vec<&LineItem> =
            line_items.iter().filter(|line| line.amount() > 0.0).collect();
        let discount_lines: Vec<&LineItem> =
            line_items.iter().filter(|line| line.is_discount()).collect();
        let main_line = charge_lines.first().copied().unwrap_or(&line_items[0]);
        debug!(
            charges = charge_lines.len(),
            discounts = discount_lines.len(),
            main = %main_line.name,
            "partitioned product lines"
        );

        let total_savings_value: f64 = discount_lines.iter().map(|line| line.amount().abs()).sum();
        let total_savings_text = (total_savings_value > 0.0).then(|| {
            format_currency_value(Some(total_savings_value), Some(&fallback_currency))
        });

        let savings_breakdown = build_savings_breakdown(&discount_lines, &fallback_currency);

        let payment_terms = extract_payment_terms(&document)
            .and_then(|raw| sanitize_payment_terms(&raw))
            .unwrap_or_else(|| {
                warnings.push("payment terms not found, using default".to_string());
                self.default_payment_terms.clone()
            });

        let duration = derive_duration(plan_label.as_deref(), expiration_date.as_deref());

        let summary_line = Some(match &main_line.quantity_display {
            Some(quantity) => format!("{} | {}", main_line.name, quantity),
            None => main_line.name.clone(),
        });

        let title = plan_label
            .clone()
            .or_else(|| order_name.clone())
            .unwrap_or_else(|| format!("Plan {index}"));
        let subtitle = reference.clone().or_else(|| order_name.clone());

        let record = QuotationRecord {
            title,
            subtitle,
            duration,
            order_name,
            order_date,
            expiration_date,
            reference,
            total_amount_text: total.text,
            total_amount_value: total.value,
            currency_symbol: fallback_currency,
            price_per_unit_text: main_line.unit_price_text.clone(),
            quantity_text: main_line.quantity_display.clone(),
            main_product: Some(main_line.name.clone()),
            payment_terms,
            total_savings_text,
            total_savings_value: (total_savings_value > 0.0).then_some(total_savings_value),
            savings_breakdown,
            summary_line,
            cta_url: source_url.to_string(),
        };

        info!(
            index,
            title = %record.title,
            lines = line_items.len(),
            "assembled quotation record"
        );

        Ok(ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// One breakdown entry per discount line, in source order, with amounts
/// rendered positive. Entries missing a label or amount are dropped.
fn build_savings_breakdown(
    discount_lines: &[&LineItem],
    fallback_symbol: &str,
) -> Vec<SavingsEntry> {
    discount_lines
        .iter()
        .filter_map(|line| {
            let symbol = line.currency_symbol.as_deref().unwrap_or(fallback_symbol);
            let mut formatted = format_currency_value(Some(line.amount().abs()), Some(symbol));
            if formatted.is_empty() {
                formatted = line.amount_text.clone().unwrap_or_default();
            }
            (!line.name.is_empty() && !formatted.is_empty()).then(|| SavingsEntry {
                label: line.name.clone(),
                amount_text: formatted,
            })
        })
        .collect()
}

impl Default for QuotationParser {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotationExtractor for QuotationParser {
    fn extract(&self, html: &str, source_url: &str, index: usize) -> Result<QuotationRecord> {
        self.parse(html, source_url, index).map(|result| result.record)
    }
}
