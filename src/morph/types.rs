use serde::{Deserialize, Serialize};

/// Tenses covered by the core indicative paradigm, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Imperfect,
    Aorist,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Passive,
}

/// Only the indicative is generated here; other moods would come from
/// extended ending tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Person {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// Canonical person/number order. Ending rows in the class tables are
/// positionally aligned to this sequence.
pub const PERSON_NUMBER: [(Person, Number); 6] = [
    (Person::First, Number::Singular),
    (Person::Second, Number::Singular),
    (Person::Third, Number::Singular),
    (Person::First, Number::Plural),
    (Person::Second, Number::Plural),
    (Person::Third, Number::Plural),
];

/// How the perfective-active stem joins its endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AoristType {
    #[serde(rename = "sigmatic")]
    Sigmatic,
    #[serde(rename = "non-sigmatic")]
    NonSigmatic,
}

/// The three named stem slots a lexicon entry may carry. Missing slots are
/// filled by fallback derivation at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stems {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imperfective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfective_active: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfective_passive: Option<String>,
}

impl Stems {
    pub fn is_empty(&self) -> bool {
        self.imperfective.is_none()
            && self.perfective_active.is_none()
            && self.perfective_passive.is_none()
    }
}

/// The stems actually used to synthesize a paradigm, after fallback
/// derivation. Recorded in every form's morphology snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStems {
    pub imperfective: String,
    pub perfective_active: String,
    pub perfective_passive: String,
}

/// Morphological provenance attached to each generated form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Morphology {
    pub class_id: String,
    pub stems: ResolvedStems,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aorist_type: Option<AoristType>,
    pub use_augment: bool,
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub override_source: Option<String>,
}

/// One synthesized word form with its full grammatical coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedForm {
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    pub person: Person,
    pub number: Number,
    pub form: String,
    pub morphology: Morphology,
}
