//! Rule-based normalization for quotation text and numbers.

pub mod amounts;
pub mod duration;
pub mod patterns;
pub mod text;

pub use amounts::{
    detect_currency_symbol, format_currency_value, monetary_parts, parse_localized_amount,
    MonetaryParts,
};
pub use duration::derive_duration;
pub use text::clean_text;
