use thiserror::Error;

/// Errors surfaced by the conjugation pipeline.
///
/// Only configuration problems are errors: an unrecognized conjugation class
/// or a lexicon file that cannot be read or parsed. Incomplete lexical data
/// (missing stems, unknown lemmas) is handled by fallback derivation and
/// never produces an `EngineError`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown conjugation class: {0}")]
    UnknownClass(String),

    #[error("lexicon I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lexicon parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
