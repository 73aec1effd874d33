//! Text normalization applied between extraction and skill matching.

/// Punctuation kept through normalization. These appear inside skill
/// tokens ("c++", "c#", "node.js", "scikit-learn") and must survive.
const KEPT_PUNCTUATION: [char; 5] = ['.', ',', '-', '+', '#'];

/// Collapses whitespace and strips non-semantic characters.
///
/// Characters outside alphanumerics, `_`, whitespace, and
/// [`KEPT_PUNCTUATION`] are replaced with a space rather than deleted,
/// so "python/flask" stays two tokens instead of fusing into one.
/// Replacement happens before whitespace collapsing, which makes the
/// function idempotent. Pure and total: empty input yields empty output.
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
            {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("Hello\n\nWorld"), "Hello World");
        assert_eq!(normalize("a\t\t b\n c"), "a b c");
    }

    #[test]
    fn test_preserves_skill_punctuation() {
        assert_eq!(normalize("C++, C#, node.js, scikit-learn"), "C++, C#, node.js, scikit-learn");
    }

    #[test]
    fn test_strips_bullets_and_symbols() {
        assert_eq!(normalize("• Python (expert) — 5 yrs"), "Python expert 5 yrs");
    }

    #[test]
    fn test_separator_becomes_space_not_fusion() {
        assert_eq!(normalize("python/flask"), "python flask");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize("  padded  "), "padded");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Hello\n\nWorld",
            "• Python / Flask — C++ & C# (2020–2024)",
            "Résumé: naïve café ☕ data™ scientist",
            "  a,b.c-d+e#f  ",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(normalize("Résumé für Müller"), "Résumé für Müller");
    }
}
