//! Verb-form synthesis: conjugation class tables, the form builder with its
//! phonological adjustment rules, and irregular-form overrides.

pub mod builder;
pub mod classes;
pub mod overrides;
pub mod types;

pub use builder::build_forms;
pub use classes::{get_conjugation_class, ConjugationClass, TenseEndings};
pub use overrides::{apply_irregular_overrides, OVERRIDE_SOURCE};
pub use types::{
    AoristType, GeneratedForm, Mood, Morphology, Number, Person, ResolvedStems, Stems, Tense,
    Voice, PERSON_NUMBER,
};
