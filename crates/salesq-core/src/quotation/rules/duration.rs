//! Human-readable duration derivation from plan labels.

use super::patterns::DURATION_UNIT;
use super::text::clean_text;

/// Derive a duration string from the plan label, falling back to the
/// expiration date and finally to the raw label.
///
/// A number followed by a year/month unit word (English or Spanish, singular
/// or plural) normalizes to "N year(s) (N*12 months)" or "N month(s)".
pub fn derive_duration(plan_label: Option<&str>, expiration_date: Option<&str>) -> Option<String> {
    let plan = plan_label.map(clean_text).unwrap_or_default();

    if !plan.is_empty() {
        if let Some(caps) = DURATION_UNIT.captures(&plan) {
            if let Ok(value) = caps[1].parse::<u32>() {
                if value > 0 {
                    let unit = caps[2].to_lowercase();
                    if unit.starts_with("año") || unit.starts_with("year") {
                        // Year counts whose month equivalent does not fit in
                        // a u32 fall through to the date/label fallbacks.
                        if let Some(months) = value.checked_mul(12) {
                            let noun = if value == 1 { "year" } else { "years" };
                            return Some(format!("{value} {noun} ({months} months)"));
                        }
                    } else {
                        let noun = if value == 1 { "month" } else { "months" };
                        return Some(format!("{value} {noun}"));
                    }
                }
            }
        }
    }

    if let Some(expiration) = expiration_date {
        return Some(format!("Valid until {expiration}"));
    }

    if plan.is_empty() { None } else { Some(plan) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_years_expand_to_months() {
        assert_eq!(
            derive_duration(Some("Enterprise 3 years"), None),
            Some("3 years (36 months)".to_string())
        );
        assert_eq!(
            derive_duration(Some("Plan 1 año"), None),
            Some("1 year (12 months)".to_string())
        );
    }

    #[test]
    fn test_months_stay_months() {
        assert_eq!(
            derive_duration(Some("6 meses"), None),
            Some("6 months".to_string())
        );
        assert_eq!(
            derive_duration(Some("1 month trial"), None),
            Some("1 month".to_string())
        );
    }

    #[test]
    fn test_expiration_fallback() {
        assert_eq!(
            derive_duration(Some("Enterprise plan"), Some("2025-01-01")),
            Some("Valid until 2025-01-01".to_string())
        );
        assert_eq!(
            derive_duration(None, Some("2025-01-01")),
            Some("Valid until 2025-01-01".to_string())
        );
    }

    #[test]
    fn test_raw_label_fallback() {
        assert_eq!(
            derive_duration(Some("Enterprise plan"), None),
            Some("Enterprise plan".to_string())
        );
        assert_eq!(derive_duration(None, None), None);
        assert_eq!(derive_duration(Some("  "), None), None);
    }

    #[test]
    fn test_huge_year_count_falls_back_instead_of_overflowing() {
        assert_eq!(
            derive_duration(Some("4000000000 years"), None),
            Some("4000000000 years".to_string())
        );
        assert_eq!(
            derive_duration(Some("4000000000 years"), Some("2025-01-01")),
            Some("Valid until 2025-01-01".to_string())
        );
    }

    #[test]
    fn test_zero_count_is_ignored() {
        // "0 years" carries no usable duration; fall through to the label.
        assert_eq!(
            derive_duration(Some("0 years"), None),
            Some("0 years".to_string())
        );
    }
}
