//! Greek text-normalization toolkit: Unicode canonicalization, accent
//! handling, transliteration, validation, and similarity scoring.
//!
//! Everything here is a pure function over string slices. Nothing panics;
//! empty or malformed input degrades to documented defaults.

pub mod normalize;
pub mod similarity;
pub mod translit;
pub mod validate;

pub use normalize::{
    apply_final_sigma, compare_accent_insensitive, is_greek_text, normalize_lemma,
    normalize_unicode, remove_accents, NormalizedKey,
};
pub use similarity::{get_similarity_score, suggest_corrections};
pub use translit::{transliterate_to_greek, transliterate_to_latin};
pub use validate::{validate_greek_input, ValidationResult};
