//! Locale-aware amount parsing and currency formatting.
//!
//! Quotation pages mix Spanish formatting ("1.234,56 €") with English
//! formatting ("US$ 1,234.56"); the position of the last comma relative to
//! the last dot decides which separator is the decimal one.

use super::text::clean_text;

/// Parse a localized numeric string into a value.
///
/// Keeps digits, comma, dot and minus; decides the decimal separator from
/// the last comma/dot positions; returns `None` for empty or non-finite
/// input. Never fails hard - an unparsable amount degrades to `None`.
///
/// A lone dot with no comma is read as the decimal separator, so "3.010"
/// parses to 3.01 rather than 3010.
pub fn parse_localized_amount(raw: &str) -> Option<f64> {
    let text = clean_text(raw);
    if text.is_empty() {
        return None;
    }

    let sanitized: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    if sanitized.is_empty() {
        return None;
    }

    let last_comma = sanitized.rfind(',');
    let last_dot = sanitized.rfind('.');

    let normalized = match (last_comma, last_dot) {
        // Comma is the decimal separator; dots are thousands separators.
        (Some(c), Some(d)) if c > d => sanitized.replace('.', "").replace(',', "."),
        (Some(_), None) => sanitized.replace(',', "."),
        // Dot is the decimal separator; commas are thousands separators.
        _ => sanitized.replace(',', ""),
    };

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Detect the currency symbol in a monetary display string.
///
/// Returns the last maximal run of characters that are not digits, comma,
/// dot, whitespace or minus, which handles symbols on either side of the
/// number ("US$ 3.010,68" as well as "1.234,56 €").
pub fn detect_currency_symbol(raw: &str) -> Option<String> {
    let text = clean_text(raw);

    let mut last = None;
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || matches!(c, ',' | '.' | '-') || c.is_whitespace() {
            if !current.is_empty() {
                last = Some(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        last = Some(current);
    }
    last
}

/// Format an amount in Spanish locale style (1.234,56), optionally suffixed
/// with a currency symbol. Absent or non-finite values yield an empty
/// string.
pub fn format_currency_value(value: Option<f64>, symbol: Option<&str>) -> String {
    let value = match value {
        Some(v) if v.is_finite() => v,
        _ => return String::new(),
    };

    let s = format!("{:.2}", value.abs());
    let (int_part, dec_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    // Group the integer digits with dots every three places.
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let formatted = format!("{sign}{grouped},{dec_part}");

    match symbol {
        Some(sym) if !sym.is_empty() => format!("{formatted} {sym}"),
        _ => formatted,
    }
}

/// Monetary display text, parsed value and detected symbol for one
/// currency-bearing node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonetaryParts {
    /// Display text, preferring the immediate parent node's text.
    pub text: Option<String>,
    /// Parsed numeric value.
    pub value: Option<f64>,
    /// Detected currency symbol.
    pub symbol: Option<String>,
}

/// Extract the monetary parts of a currency-value node given its own text
/// and the text of its immediate parent.
///
/// The parent usually carries the currency symbol next to the bare number in
/// the leaf, so display text and symbol prefer the parent while the numeric
/// value prefers the leaf.
pub fn monetary_parts(own_text: &str, parent_text: &str) -> MonetaryParts {
    let raw = clean_text(own_text);
    let parent = clean_text(parent_text);

    let text = if parent.is_empty() { raw.clone() } else { parent };
    let symbol = detect_currency_symbol(&text);
    let value = parse_localized_amount(if raw.is_empty() { &text } else { &raw });

    MonetaryParts {
        text: if text.is_empty() { None } else { Some(text) },
        value,
        symbol,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_spanish_format() {
        assert_eq!(parse_localized_amount("1.234,56"), Some(1234.56));
        assert_eq!(parse_localized_amount("-45,00"), Some(-45.0));
        assert_eq!(parse_localized_amount("3.010,68 €"), Some(3010.68));
    }

    #[test]
    fn test_parse_english_format() {
        assert_eq!(parse_localized_amount("1,234.56"), Some(1234.56));
        assert_eq!(parse_localized_amount("US$ 2,540.00"), Some(2540.0));
    }

    #[test]
    fn test_parse_lone_dot_reads_as_decimal() {
        // The literal separator rule: no comma present, so the dot is the
        // decimal separator even when it looks like a thousands group.
        assert_eq!(parse_localized_amount("3.010"), Some(3.01));
    }

    #[test]
    fn test_parse_rejects_empty_and_symbol_only() {
        assert_eq!(parse_localized_amount(""), None);
        assert_eq!(parse_localized_amount("   "), None);
        assert_eq!(parse_localized_amount("€"), None);
    }

    #[test]
    fn test_detect_currency_symbol() {
        assert_eq!(
            detect_currency_symbol("US$ 3.010,68"),
            Some("US$".to_string())
        );
        assert_eq!(detect_currency_symbol("1.234,56 €"), Some("€".to_string()));
        assert_eq!(detect_currency_symbol("1.234,56"), None);
    }

    #[test]
    fn test_format_currency_value() {
        assert_eq!(format_currency_value(Some(1234.56), None), "1.234,56");
        assert_eq!(
            format_currency_value(Some(1234.56), Some("€")),
            "1.234,56 €"
        );
        assert_eq!(format_currency_value(Some(-45.0), Some("€")), "-45,00 €");
        assert_eq!(
            format_currency_value(Some(12345678.9), None),
            "12.345.678,90"
        );
        assert_eq!(format_currency_value(None, Some("€")), "");
        assert_eq!(format_currency_value(Some(f64::NAN), None), "");
    }

    #[test]
    fn test_format_parse_round_trip() {
        for v in [0.5, 45.0, 1234.56, 987654.32] {
            let formatted = format_currency_value(Some(v), None);
            let parsed = parse_localized_amount(&formatted).unwrap();
            assert!((parsed - v).abs() < 0.005, "{v} -> {formatted} -> {parsed}");
        }
    }

    #[test]
    fn test_monetary_parts_prefers_parent_text_and_leaf_value() {
        let parts = monetary_parts("3.010,68", "US$ 3.010,68");
        assert_eq!(parts.text, Some("US$ 3.010,68".to_string()));
        assert_eq!(parts.value, Some(3010.68));
        assert_eq!(parts.symbol, Some("US$".to_string()));
    }

    #[test]
    fn test_monetary_parts_falls_back_to_parent_value() {
        let parts = monetary_parts("", "-45,00 €");
        assert_eq!(parts.text, Some("-45,00 €".to_string()));
        assert_eq!(parts.value, Some(-45.0));
        assert_eq!(parts.symbol, Some("€".to_string()));
    }

    #[test]
    fn test_monetary_parts_empty() {
        assert_eq!(monetary_parts("", ""), MonetaryParts::default());
    }
}
