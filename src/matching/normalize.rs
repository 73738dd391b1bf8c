//! Canonical comparison form for author names and queries.

use unicode_normalization::UnicodeNormalization;

/// Reduce text to a lowercase ASCII form with single spaces.
///
/// Compatibility decomposition splits accented letters into base letter plus
/// combining mark; anything left outside ASCII is dropped.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Café Müller"), "cafe muller");
        assert_eq!(normalize("ÅNGSTRÖM"), "angstrom");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  Too   Many   Spaces "), "too many spaces");
        assert_eq!(normalize("tab\tand\nnewline"), "tab and newline");
    }

    #[test]
    fn drops_characters_without_ascii_form() {
        assert_eq!(normalize("東京 Tokyo"), "tokyo");
        assert_eq!(normalize("🔥🔥"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn compatibility_forms_fold_to_ascii() {
        assert_eq!(normalize("ﬁsh"), "fish");
        assert_eq!(normalize("Ｋｉｋｉ"), "kiki");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "Café Müller",
            "  Too   Many   Spaces ",
            "Zoë_42 ✨",
            "ＡＢＣ  déf",
            "",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }
}
