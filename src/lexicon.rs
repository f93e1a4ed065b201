use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::morph::types::{AoristType, Stems};
use crate::text::normalize::{normalize_lemma, NormalizedKey};

/// One verb lemma with its class assignment and stem data.
/// Created by [`load_lexicon`], read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbLexiconEntry {
    pub lemma: String,
    pub class_id: String,
    #[serde(default)]
    pub stems: Stems,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aorist_type: Option<AoristType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_augment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,
}

/// Attested irregular 1st-singular aorist forms for one lemma. A dash value
/// ("-" or "–") means the source had no data for that slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrregularOverride {
    pub lemma: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aorist_active: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aorist_passive: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participle: Option<String>,
    pub source: String,
}

/// True for the placeholder values irregular sources use for "no data".
pub fn is_placeholder(value: &str) -> bool {
    value == "-" || value == "–"
}

#[derive(Deserialize)]
struct LexiconFile {
    #[serde(default)]
    entries: Vec<VerbLexiconEntry>,
}

#[derive(Deserialize)]
struct IrregularsFile {
    #[serde(default)]
    entries: Vec<IrregularOverride>,
}

/// Loads a lexicon file and keys every entry by the normalized lemma.
/// Later entries with the same key overwrite earlier ones. Malformed JSON
/// fails the whole load; nothing is returned partially.
pub fn load_lexicon(path: &Path) -> Result<HashMap<NormalizedKey, VerbLexiconEntry>, EngineError> {
    let reader = BufReader::new(File::open(path)?);
    let file: LexiconFile = serde_json::from_reader(reader)?;
    let mut entries = HashMap::with_capacity(file.entries.len());
    for entry in file.entries {
        if entry.stems.is_empty() {
            warn!("entry {} has no stem data, fallback derivation will be used", entry.lemma);
        }
        entries.insert(normalize_lemma(&entry.lemma), entry);
    }
    info!("loaded {} lexicon entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Loads an irregular-forms file keyed the same way as the lexicon.
/// Entries whose lemma normalizes to the empty key are skipped.
pub fn load_irregulars(
    path: &Path,
) -> Result<HashMap<NormalizedKey, IrregularOverride>, EngineError> {
    let reader = BufReader::new(File::open(path)?);
    let file: IrregularsFile = serde_json::from_reader(reader)?;
    let mut irregulars = HashMap::with_capacity(file.entries.len());
    for item in file.entries {
        let key = normalize_lemma(&item.lemma);
        if !key.is_empty() {
            irregulars.insert(key, item);
        }
    }
    info!(
        "loaded {} irregular overrides from {}",
        irregulars.len(),
        path.display()
    );
    Ok(irregulars)
}

/// Derives a base stem from a lemma by stripping the longest matching verb
/// ending, and uses it for all three slots. This is the degraded path for
/// lemmas with no (or incomplete) lexical stem data.
pub fn derive_stems_fallback(lemma: &str) -> Stems {
    let base = if let Some(stripped) = lemma.strip_suffix("ομαι") {
        stripped
    } else if let Some(stripped) = lemma.strip_suffix("μαι") {
        stripped
    } else if let Some(stripped) = lemma.strip_suffix('ώ') {
        stripped
    } else if let Some(stripped) = lemma.strip_suffix('ω') {
        stripped
    } else {
        lemma
    };
    Stems {
        imperfective: Some(base.to_string()),
        perfective_active: Some(base.to_string()),
        perfective_passive: Some(base.to_string()),
    }
}
