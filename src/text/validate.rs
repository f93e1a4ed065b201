use serde::Serialize;

use crate::text::normalize::{is_greek_char, is_greek_text, normalize_unicode};

const LONG_INPUT_THRESHOLD: usize = 200;

/// The outcome of validating a piece of user-supplied Greek text.
/// Findings are data for the caller to act on, never errors.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub error: Option<String>,
    pub normalized: String,
    pub has_greek: bool,
    pub character_count: usize,
    pub invalid_characters: Vec<char>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn invalid(reason: &str) -> Self {
        Self {
            valid: false,
            error: Some(reason.to_string()),
            normalized: String::new(),
            has_greek: false,
            character_count: 0,
            invalid_characters: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Validates Greek text input: normalizes it, detects Greek characters,
/// counts non-space characters, reports characters outside the accepted
/// blocks, and warns on mixed scripts or unusually long input.
pub fn validate_greek_input(text: &str) -> ValidationResult {
    if text.is_empty() {
        return ValidationResult::invalid("Empty text");
    }

    let normalized = normalize_unicode(text.trim());
    let has_greek = is_greek_text(&normalized);
    let character_count = normalized.chars().filter(|c| *c != ' ').count();
    let invalid_characters = find_invalid_characters(&normalized);

    let mut warnings = Vec::new();
    if has_greek && has_latin_characters(&normalized) {
        warnings.push("Mixed Greek and Latin characters detected".to_string());
    }
    if character_count > LONG_INPUT_THRESHOLD {
        warnings.push("Text is unusually long".to_string());
    }

    ValidationResult {
        valid: true,
        error: None,
        normalized,
        has_greek,
        character_count,
        invalid_characters,
        warnings,
    }
}

/// Characters outside {Greek blocks, basic Latin, punctuation}. Each
/// offender is reported once. ASCII punctuation is already inside the basic
/// Latin block; the extra check admits typographic punctuation such as the
/// en dash and curly quotes (General Punctuation, U+2000-U+206F).
fn find_invalid_characters(text: &str) -> Vec<char> {
    let mut invalid = Vec::new();
    for c in text.chars() {
        if c.is_whitespace() || is_greek_char(c) || is_basic_latin(c) || is_punctuation_like(c) {
            continue;
        }
        if !invalid.contains(&c) {
            invalid.push(c);
        }
    }
    invalid
}

fn is_basic_latin(c: char) -> bool {
    (0x0020..=0x007F).contains(&(c as u32))
}

fn is_punctuation_like(c: char) -> bool {
    c.is_ascii_punctuation() || (0x2000..=0x206F).contains(&(c as u32))
}

fn has_latin_characters(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}
