//! Text normalization for text pulled out of arbitrary DOM nodes.

/// Canonicalize a raw text fragment.
///
/// Strips byte-order marks, turns no-break and narrow no-break spaces into
/// ordinary spaces, collapses whitespace runs to a single space and trims.
/// Idempotent; empty input yields an empty string.
pub fn clean_text(raw: &str) -> String {
    // U+00A0 and U+202F count as whitespace for `split_whitespace`, so the
    // collapse pass also handles the space replacements.
    let without_bom: String = raw.chars().filter(|&c| c != '\u{feff}').collect();
    without_bom.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(clean_text("  Enterprise \t Suite \n"), "Enterprise Suite");
    }

    #[test]
    fn test_clean_text_strips_bom_and_nbsp() {
        assert_eq!(clean_text("\u{feff}1\u{00a0}234,56\u{202f}€"), "1 234,56 €");
    }

    #[test]
    fn test_clean_text_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \t\n"), "");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let samples = ["  a\u{00a0}b  c ", "\u{feff}x", "already clean"];
        for raw in samples {
            let once = clean_text(raw);
            assert_eq!(clean_text(&once), once);
        }
    }
}
