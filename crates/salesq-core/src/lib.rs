//! Core library for sales-quotation extraction.
//!
//! This crate provides:
//! - Text normalization for arbitrary DOM text (BOM, no-break spaces, runs)
//! - Locale-aware numeric parsing and currency formatting (Spanish/English)
//! - Line-item, field and payment-terms extraction from quotation HTML
//! - Assembly of a single immutable [`QuotationRecord`] per document

pub mod error;
pub mod models;
pub mod quotation;

pub use error::{ExtractionError, Result};
pub use models::quotation::{LineItem, QuotationRecord, SavingsEntry};
pub use quotation::{ExtractionResult, QuotationExtractor, QuotationParser};
