//! Quotation data models consumed by downstream email-layout renderers.

use serde::{Deserialize, Serialize};

/// One row of a quotation's product table.
///
/// Created once per detected table row and immutable thereafter. Rows whose
/// extracted name is empty are discarded during extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product/service name (always non-empty).
    pub name: String,

    /// Parsed numeric quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_value: Option<f64>,

    /// Raw quantity plus unit label, e.g. "12 Users".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_display: Option<String>,

    /// Unit price as displayed in the source markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_text: Option<String>,

    /// Parsed unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_value: Option<f64>,

    /// Line amount as displayed in the source markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_text: Option<String>,

    /// Parsed line amount (negative for discount lines).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_value: Option<f64>,

    /// Currency symbol detected on this row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
}

impl LineItem {
    /// Parsed line amount, treating an unparsable amount as zero.
    pub fn amount(&self) -> f64 {
        self.amount_value.unwrap_or(0.0)
    }

    /// Whether this line reduces the total (negative amount).
    pub fn is_discount(&self) -> bool {
        self.amount() < 0.0
    }
}

/// One discount line of the savings breakdown, with the amount rendered as a
/// positive currency-formatted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsEntry {
    /// Name of the discount line as it appeared in the product table.
    pub label: String,

    /// Absolute discount amount, currency-formatted.
    pub amount_text: String,
}

/// The structured output of parsing one quotation document.
///
/// Immutable once produced. Any optional field may be absent; renderers
/// substitute a neutral default or omit the corresponding region. Display
/// fields are pre-formatted text; numeric fields exist only for arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationRecord {
    /// Plan label, else order name, else a generated placeholder.
    pub title: String,

    /// Order reference, else order name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Human-readable duration, e.g. "3 years (36 months)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Order reference code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Grand total as displayed in the source markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_text: Option<String>,

    /// Parsed grand total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount_value: Option<f64>,

    /// Currency symbol for the whole record (detected, else "€").
    pub currency_symbol: String,

    /// Unit price of the main line as displayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit_text: Option<String>,

    /// Quantity display of the main line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_text: Option<String>,

    /// Name of the main (primary offering) line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_product: Option<String>,

    /// Sanitized payment-terms text, or the upfront-payment default.
    pub payment_terms: String,

    /// Sum of absolute discount amounts, currency-formatted. Absent when no
    /// discount lines exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_savings_text: Option<String>,

    /// Sum of absolute discount amounts. Absent when zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_savings_value: Option<f64>,

    /// Discount lines in the order they appeared in the source table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub savings_breakdown: Vec<SavingsEntry>,

    /// One-line summary: main line name and quantity joined by " | ".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_line: Option<String>,

    /// Originating source URL, kept verbatim for the call-to-action link.
    pub cta_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_amount_defaults_to_zero() {
        let item = LineItem {
            name: "Subscription".to_string(),
            quantity_value: None,
            quantity_display: None,
            unit_price_text: None,
            unit_price_value: None,
            amount_text: None,
            amount_value: None,
            currency_symbol: None,
        };
        assert_eq!(item.amount(), 0.0);
        assert!(!item.is_discount());
    }

    #[test]
    fn test_discount_detection() {
        let item = LineItem {
            name: "Loyalty discount".to_string(),
            quantity_value: Some(1.0),
            quantity_display: Some("1 Units".to_string()),
            unit_price_text: None,
            unit_price_value: None,
            amount_text: Some("-45,00 €".to_string()),
            amount_value: Some(-45.0),
            currency_symbol: Some("€".to_string()),
        };
        assert!(item.is_discount());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let entry = SavingsEntry {
            label: "Discount".to_string(),
            amount_text: "45,00 €".to_string(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"label\""));
        assert!(json.contains("45,00 €"));
    }
}
