use crate::lexicon::{is_placeholder, IrregularOverride};
use crate::morph::types::{GeneratedForm, Number, Person, Tense, Voice};

/// Provenance tag recorded on every overridden form.
pub const OVERRIDE_SOURCE: &str = "philologist_irregulars";

/// Rewrites the attested irregular slots in a generated paradigm. Only the
/// two 1st-singular aorist forms (active and passive) are eligible, and only
/// when the override carries a non-placeholder value. Every other form is
/// left untouched. This runs after the form builder, never before.
pub fn apply_irregular_overrides(
    forms: &mut [GeneratedForm],
    irregular: Option<&IrregularOverride>,
) {
    let Some(irregular) = irregular else {
        return;
    };

    for form in forms.iter_mut() {
        if form.tense != Tense::Aorist
            || form.person != Person::First
            || form.number != Number::Singular
        {
            continue;
        }
        let replacement = match form.voice {
            Voice::Active => irregular.aorist_active.as_deref(),
            Voice::Passive => irregular.aorist_passive.as_deref(),
        };
        if let Some(replacement) = replacement {
            if !replacement.is_empty() && !is_placeholder(replacement) {
                form.form = replacement.to_string();
                form.morphology.override_source = Some(OVERRIDE_SOURCE.to_string());
            }
        }
    }
}
