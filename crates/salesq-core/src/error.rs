//! Error types for the salesq-core library.

use thiserror::Error;

/// Errors related to quotation extraction.
///
/// Only the complete absence of product lines is fatal for a document.
/// Unparsable numbers and missing optional fields degrade to `None` and
/// never surface here.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document contained no recognizable product rows. Price and offer
    /// data without line items is meaningless, so no partial record is
    /// produced.
    #[error("no product lines found in quotation document")]
    NoLineItems,
}

/// Result type for the salesq library.
pub type Result<T> = std::result::Result<T, ExtractionError>;
