use std::collections::HashMap;
use std::path::Path;

use log::debug;

use crate::errors::EngineError;
use crate::lexicon::{
    derive_stems_fallback, load_irregulars, load_lexicon, IrregularOverride, VerbLexiconEntry,
};
use crate::morph::builder::build_forms;
use crate::morph::overrides::apply_irregular_overrides;
use crate::morph::types::GeneratedForm;
use crate::text::normalize::{normalize_lemma, NormalizedKey};

/// Synthesizes the full indicative paradigm for a lemma.
///
/// The lemma is normalized and looked up in the lexicon; an unknown lemma is
/// handled by a minimal class-A fallback entry with heuristically derived
/// stems, so this only fails when an entry names an unknown class.
pub fn generate_conjugations(
    lemma: &str,
    lexicon: &HashMap<NormalizedKey, VerbLexiconEntry>,
    irregulars: Option<&HashMap<NormalizedKey, IrregularOverride>>,
) -> Result<Vec<GeneratedForm>, EngineError> {
    let normalized = normalize_lemma(lemma);

    let fallback;
    let entry = match lexicon.get(&normalized) {
        Some(entry) => entry,
        None => {
            debug!("lemma {lemma} not in lexicon, deriving fallback stems");
            fallback = VerbLexiconEntry {
                lemma: lemma.to_string(),
                class_id: "A".to_string(),
                stems: derive_stems_fallback(lemma),
                aorist_type: None,
                use_augment: None,
                notes: Some("fallback_lexicon".to_string()),
                provenance: None,
            };
            &fallback
        }
    };

    let mut forms = build_forms(entry)?;
    let irregular = irregulars.and_then(|map| map.get(&normalized));
    apply_irregular_overrides(&mut forms, irregular);
    Ok(forms)
}

/// The assembled pipeline: immutable lexicon and irregulars maps loaded once
/// up front. Holds no other state, so a shared reference can serve any number
/// of threads concurrently.
pub struct ConjugationEngine {
    lexicon: HashMap<NormalizedKey, VerbLexiconEntry>,
    irregulars: HashMap<NormalizedKey, IrregularOverride>,
}

impl ConjugationEngine {
    pub fn new(
        lexicon: HashMap<NormalizedKey, VerbLexiconEntry>,
        irregulars: HashMap<NormalizedKey, IrregularOverride>,
    ) -> Self {
        Self { lexicon, irregulars }
    }

    /// Loads the lexicon and, when given, the irregulars file. Either file
    /// failing to read or parse fails the whole construction.
    pub fn from_files(lexicon: &Path, irregulars: Option<&Path>) -> Result<Self, EngineError> {
        let lexicon = load_lexicon(lexicon)?;
        let irregulars = match irregulars {
            Some(path) => load_irregulars(path)?,
            None => HashMap::new(),
        };
        Ok(Self::new(lexicon, irregulars))
    }

    pub fn generate(&self, lemma: &str) -> Result<Vec<GeneratedForm>, EngineError> {
        generate_conjugations(lemma, &self.lexicon, Some(&self.irregulars))
    }

    pub fn lexicon(&self) -> &HashMap<NormalizedKey, VerbLexiconEntry> {
        &self.lexicon
    }

    pub fn irregulars(&self) -> &HashMap<NormalizedKey, IrregularOverride> {
        &self.irregulars
    }
}
