use crate::text::normalize::remove_accents;

/// Latin -> Greek substitution table. Replacement is greedy and sequential,
/// so multi-letter sequences (diphthongs, th/ch/ps digraphs) must come before
/// any single letter that prefixes them.
const LATIN_TO_GREEK: &[(&str, &str)] = &[
    // Diphthongs
    ("ai", "αι"),
    ("au", "αυ"),
    ("ei", "ει"),
    ("eu", "ευ"),
    ("oi", "οι"),
    ("ou", "ου"),
    ("ui", "υι"),
    ("Ai", "Αι"),
    ("Au", "Αυ"),
    ("Ei", "Ει"),
    ("Eu", "Ευ"),
    ("Oi", "Οι"),
    ("Ou", "Ου"),
    ("Ui", "Υι"),
    // Consonant digraphs
    ("th", "θ"),
    ("ch", "χ"),
    ("ps", "ψ"),
    ("Th", "Θ"),
    ("Ch", "Χ"),
    ("Ps", "Ψ"),
    // Vowels
    ("a", "α"),
    ("e", "ε"),
    ("i", "ι"),
    ("o", "ο"),
    ("u", "υ"),
    ("A", "Α"),
    ("E", "Ε"),
    ("I", "Ι"),
    ("O", "Ο"),
    ("U", "Υ"),
    // Consonants
    ("b", "β"),
    ("g", "γ"),
    ("d", "δ"),
    ("z", "ζ"),
    ("k", "κ"),
    ("l", "λ"),
    ("m", "μ"),
    ("n", "ν"),
    ("x", "ξ"),
    ("p", "π"),
    ("r", "ρ"),
    ("s", "σ"),
    ("t", "τ"),
    ("f", "φ"),
    ("w", "ω"),
    ("B", "Β"),
    ("G", "Γ"),
    ("D", "Δ"),
    ("Z", "Ζ"),
    ("K", "Κ"),
    ("L", "Λ"),
    ("M", "Μ"),
    ("N", "Ν"),
    ("X", "Ξ"),
    ("P", "Π"),
    ("R", "Ρ"),
    ("S", "Σ"),
    ("T", "Τ"),
    ("F", "Φ"),
    ("W", "Ω"),
    // Alternative spellings
    ("h", "η"),
    ("H", "Η"),
    ("y", "υ"),
    ("Y", "Υ"),
    ("c", "κ"),
    ("C", "Κ"),
    ("j", "ι"),
    ("J", "Ι"),
    ("v", "β"),
    ("V", "Β"),
    ("q", "κ"),
    ("Q", "Κ"),
];

/// Greek -> Latin reverse table. Every key is a single character, so ordering
/// does not matter here; theta/chi/psi expand to digraphs.
const GREEK_TO_LATIN: &[(&str, &str)] = &[
    ("α", "a"),
    ("β", "b"),
    ("γ", "g"),
    ("δ", "d"),
    ("ε", "e"),
    ("ζ", "z"),
    ("η", "h"),
    ("θ", "th"),
    ("ι", "i"),
    ("κ", "k"),
    ("λ", "l"),
    ("μ", "m"),
    ("ν", "n"),
    ("ξ", "x"),
    ("ο", "o"),
    ("π", "p"),
    ("ρ", "r"),
    ("σ", "s"),
    ("ς", "s"),
    ("τ", "t"),
    ("υ", "u"),
    ("φ", "f"),
    ("χ", "ch"),
    ("ψ", "ps"),
    ("ω", "w"),
    ("Α", "A"),
    ("Β", "B"),
    ("Γ", "G"),
    ("Δ", "D"),
    ("Ε", "E"),
    ("Ζ", "Z"),
    ("Η", "H"),
    ("Θ", "Th"),
    ("Ι", "I"),
    ("Κ", "K"),
    ("Λ", "L"),
    ("Μ", "M"),
    ("Ν", "N"),
    ("Ξ", "X"),
    ("Ο", "O"),
    ("Π", "P"),
    ("Ρ", "R"),
    ("Σ", "S"),
    ("Τ", "T"),
    ("Υ", "U"),
    ("Φ", "F"),
    ("Χ", "Ch"),
    ("Ψ", "Ps"),
    ("Ω", "W"),
];

fn substitute(text: &str, table: &[(&str, &str)]) -> String {
    let mut result = text.to_string();
    for (from, to) in table {
        if result.contains(from) {
            result = result.replace(from, to);
        }
    }
    result
}

/// Converts Latin text to Greek by greedy longest-match substitution.
pub fn transliterate_to_greek(latin: &str) -> String {
    if latin.is_empty() {
        return String::new();
    }
    substitute(latin, LATIN_TO_GREEK)
}

/// Converts Greek text to Latin. Accents are stripped first, so the mapping
/// is lossy with respect to diacritics.
pub fn transliterate_to_latin(greek: &str) -> String {
    if greek.is_empty() {
        return String::new();
    }
    substitute(&remove_accents(greek), GREEK_TO_LATIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize::compare_accent_insensitive;

    #[test]
    fn digraphs_take_precedence() {
        assert_eq!(transliterate_to_greek("thelo"), "θελο");
        assert_eq!(transliterate_to_greek("psari"), "ψαρι");
        assert_eq!(transliterate_to_greek("cheri"), "χερι");
        assert_eq!(transliterate_to_greek("ouzo"), "ουζο");
    }

    #[test]
    fn simple_words() {
        assert_eq!(transliterate_to_greek("kalimera"), "καλιμερα");
        assert_eq!(transliterate_to_greek(""), "");
    }

    #[test]
    fn greek_to_latin_strips_accents() {
        assert_eq!(transliterate_to_latin("γράφω"), "grafw");
        assert_eq!(transliterate_to_latin("θάλασσα"), "thalassa");
        // final sigma maps like medial sigma
        assert_eq!(transliterate_to_latin("λόγος"), "logos");
    }

    #[test]
    fn round_trip_is_accent_insensitively_stable() {
        let greek = transliterate_to_greek("grapho");
        let latin = transliterate_to_latin(&greek);
        let again = transliterate_to_greek(&latin);
        assert!(compare_accent_insensitive(&greek, &again));
    }
}
