use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The canonical lookup key for a lemma: composed, lowercased, trimmed,
/// accent-stripped, with final sigma mapped to medial sigma.
pub type NormalizedKey = String;

// Greek and Coptic, Greek Extended
const GREEK_BASIC_RANGE: (u32, u32) = (0x0370, 0x03FF);
const GREEK_EXTENDED_RANGE: (u32, u32) = (0x1F00, 0x1FFF);

const FINAL_SIGMA: char = 'ς';
const MEDIAL_SIGMA: char = 'σ';

/// Canonicalizes text to NFC (decompose, then recompose) so that visually
/// identical strings compare equal regardless of how they were typed.
pub fn normalize_unicode(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.nfd().collect::<String>().nfc().collect()
}

/// Removes all diacritical marks while preserving base characters, and maps
/// final sigma to medial sigma so accent-insensitive comparisons line up.
/// Idempotent.
pub fn remove_accents(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == FINAL_SIGMA { MEDIAL_SIGMA } else { c })
        .collect::<String>()
        .nfc()
        .collect()
}

/// Derives the [`NormalizedKey`] under which a lemma is stored and looked up.
/// Two lemmas denote the same verb iff their keys are equal.
pub fn normalize_lemma(text: &str) -> NormalizedKey {
    if text.is_empty() {
        return String::new();
    }
    let lowered = normalize_unicode(text).trim().to_lowercase();
    remove_accents(&lowered)
}

/// Compares two Greek strings ignoring accents and case.
pub fn compare_accent_insensitive(a: &str, b: &str) -> bool {
    if a.is_empty() && b.is_empty() {
        return true;
    }
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let clean_a = remove_accents(&normalize_unicode(a.trim().to_lowercase().as_str()));
    let clean_b = remove_accents(&normalize_unicode(b.trim().to_lowercase().as_str()));
    clean_a == clean_b
}

fn ends_word(next: Option<char>) -> bool {
    match next {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '!' | '?'),
    }
}

/// Rewrites any sigma in word-final position (end of string, or followed by
/// whitespace/punctuation) to the final-sigma glyph.
pub fn apply_final_sigma(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == MEDIAL_SIGMA && ends_word(chars.get(i + 1).copied()) {
            out.push(FINAL_SIGMA);
        } else {
            out.push(c);
        }
    }
    out
}

/// True iff at least one code point falls in the Greek or Greek Extended
/// Unicode blocks.
pub fn is_greek_text(text: &str) -> bool {
    text.chars().any(is_greek_char)
}

pub(crate) fn is_greek_char(c: char) -> bool {
    let cp = c as u32;
    (GREEK_BASIC_RANGE.0..=GREEK_BASIC_RANGE.1).contains(&cp)
        || (GREEK_EXTENDED_RANGE.0..=GREEK_EXTENDED_RANGE.1).contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_unicode_is_idempotent() {
        for s in ["γράφω", "λέω", "ἀγαπῶ", "", "abc"] {
            let once = normalize_unicode(s);
            assert_eq!(normalize_unicode(&once), once);
        }
    }

    #[test]
    fn normalize_unicode_composes_decomposed_input() {
        // alpha + combining acute composes to a single scalar
        let decomposed = "\u{03B1}\u{0301}";
        assert_eq!(normalize_unicode(decomposed), "ά");
    }

    #[test]
    fn remove_accents_strips_diacritics() {
        assert_eq!(remove_accents("γράφω"), "γραφω");
        assert_eq!(remove_accents("έχω"), "εχω");
        assert_eq!(remove_accents("ώ"), "ω");
        assert_eq!(remove_accents("ή"), "η");
    }

    #[test]
    fn remove_accents_is_idempotent() {
        for s in ["γράφω", "ἀγαπῶ", "λές"] {
            let once = remove_accents(s);
            assert_eq!(remove_accents(&once), once);
        }
    }

    #[test]
    fn remove_accents_maps_final_sigma() {
        assert_eq!(remove_accents("γράφεις"), "γραφεισ");
    }

    #[test]
    fn normalize_lemma_is_idempotent_and_case_folded() {
        let key = normalize_lemma("  Γράφω ");
        assert_eq!(key, "γραφω");
        assert_eq!(normalize_lemma(&key), key);
    }

    #[test]
    fn accent_insensitive_comparison() {
        assert!(compare_accent_insensitive("γράφω", "γραφω"));
        assert!(compare_accent_insensitive("ΓΡΆΦΩ", "γραφω"));
        assert!(!compare_accent_insensitive("γράφω", "λέω"));
        assert!(compare_accent_insensitive("", ""));
        assert!(!compare_accent_insensitive("γράφω", ""));
    }

    #[test]
    fn comparison_is_symmetric() {
        let pairs = [("γράφω", "γραφω"), ("λέω", "λες"), ("", "α")];
        for (a, b) in pairs {
            assert_eq!(
                compare_accent_insensitive(a, b),
                compare_accent_insensitive(b, a)
            );
        }
    }

    #[test]
    fn final_sigma_at_word_boundaries() {
        assert_eq!(apply_final_sigma("γραφεισ"), "γραφεις");
        assert_eq!(apply_final_sigma("εσυ γραφεισ."), "εσυ γραφεις.");
        assert_eq!(apply_final_sigma("σπιτι"), "σπιτι");
        // medial sigma untouched
        assert_eq!(apply_final_sigma("εστε"), "εστε");
    }

    #[test]
    fn greek_detection() {
        assert!(is_greek_text("γράφω"));
        assert!(is_greek_text("abc ω"));
        assert!(!is_greek_text("grapho"));
        assert!(!is_greek_text(""));
    }
}
