//! Common regex patterns for quotation extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Duration token in a plan label: "3 years", "1 año", "6 meses", ...
    pub static ref DURATION_UNIT: Regex = Regex::new(
        r"(?i)(\d+)\s*(año|años|year|years|mes|meses|month|months)"
    ).unwrap();

    // Recurring legal sentence injected into payment-terms sections by the
    // vendor portal; stripped wherever it appears.
    pub static ref PAYMENT_DISCLAIMER: Regex = Regex::new(
        r"(?i)I hereby agree that I will be invoiced upon order acceptation and I will pay(?: the invoice within [^.\n]+)?\.?"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_unit_matches_both_locales() {
        assert!(DURATION_UNIT.is_match("Enterprise 3 years"));
        assert!(DURATION_UNIT.is_match("Plan 2 años"));
        assert!(DURATION_UNIT.is_match("6 MESES"));
        assert!(!DURATION_UNIT.is_match("Enterprise plan"));
    }

    #[test]
    fn test_disclaimer_matches_with_and_without_term() {
        assert!(PAYMENT_DISCLAIMER.is_match(
            "I hereby agree that I will be invoiced upon order acceptation and I will pay the invoice within 30 days."
        ));
        assert!(PAYMENT_DISCLAIMER.is_match(
            "I hereby agree that I will be invoiced upon order acceptation and I will pay."
        ));
    }
}
