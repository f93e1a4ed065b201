use crate::text::normalize::{compare_accent_insensitive, normalize_unicode, remove_accents};
use crate::text::translit::transliterate_to_greek;

fn clean(text: &str) -> String {
    remove_accents(&normalize_unicode(text.trim().to_lowercase().as_str()))
}

/// Scores how close two Greek strings are, in [0, 1]. Comparison is accent-
/// and case-insensitive; an exact cleaned match scores 1.0, anything else is
/// the normalized longest-common-subsequence length.
pub fn get_similarity_score(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let clean_a = clean(a);
    let clean_b = clean(b);
    if clean_a == clean_b {
        return 1.0;
    }
    lcs_similarity(&clean_a, &clean_b)
}

/// Classic O(m*n) dynamic-programming LCS, normalized by the longer length.
fn lcs_similarity(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (m, n) = (a_chars.len(), b_chars.len());
    if m == 0 || n == 0 {
        return 0.0;
    }

    // Flat (m+1)x(n+1) table, row-major
    let mut dp = vec![0usize; (m + 1) * (n + 1)];
    for i in 1..=m {
        for j in 1..=n {
            dp[i * (n + 1) + j] = if a_chars[i - 1] == b_chars[j - 1] {
                dp[(i - 1) * (n + 1) + (j - 1)] + 1
            } else {
                dp[(i - 1) * (n + 1) + j].max(dp[i * (n + 1) + (j - 1)])
            };
        }
    }

    let lcs_len = dp[m * (n + 1) + n];
    lcs_len as f64 / m.max(n) as f64
}

/// Heuristic, ordered hints for why `input` failed to match `target`:
/// accents only, capitalization only, or Latin input that transliterates to
/// the target. Empty when nothing fires or either side is empty.
pub fn suggest_corrections(input: &str, target: &str) -> Vec<String> {
    if input.is_empty() || target.is_empty() {
        return Vec::new();
    }

    let mut suggestions = Vec::new();

    if compare_accent_insensitive(input, target) {
        suggestions.push(format!("Check accents: {target}"));
    }

    if remove_accents(&input.to_lowercase()) == remove_accents(&target.to_lowercase()) {
        suggestions.push(format!("Check capitalization: {target}"));
    }

    let transliterated = transliterate_to_greek(input);
    if compare_accent_insensitive(&transliterated, target) {
        suggestions.push(format!("Try Greek characters: {target}"));
    }

    suggestions
}
