//! Quotation field extraction module.

mod dom;
mod line_items;
mod locators;
mod parser;
mod payment_terms;
pub mod rules;
mod selectors;

pub use line_items::extract_line_items;
pub use locators::{find_section_text, find_table_value, subscription_info_table};
pub use parser::{ExtractionResult, QuotationParser};
pub use payment_terms::{extract_payment_terms, sanitize_payment_terms, DEFAULT_PAYMENT_TERMS};

use crate::error::ExtractionError;
use crate::models::quotation::QuotationRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for quotation extractors.
///
/// The pipeline is stateless: each call processes exactly one in-memory HTML
/// document and returns exactly one record or fails.
pub trait QuotationExtractor {
    /// Extract a quotation record from an HTML document. `source_url` is
    /// echoed verbatim into the record; `index` is a 1-based ordinal used
    /// only for the placeholder title.
    fn extract(&self, html: &str, source_url: &str, index: usize) -> Result<QuotationRecord>;
}
