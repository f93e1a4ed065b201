use crate::errors::EngineError;
use crate::lexicon::{derive_stems_fallback, VerbLexiconEntry};
use crate::morph::classes::get_conjugation_class;
use crate::morph::types::{
    AoristType, GeneratedForm, Mood, Morphology, ResolvedStems, Tense, Voice, PERSON_NUMBER,
};
use crate::text::normalize::apply_final_sigma;

const VOWELS: &str = "αεηιουωάέήίόύώ";

fn starts_with_vowel(stem: &str) -> bool {
    stem.chars().next().is_some_and(|c| VOWELS.contains(c))
}

/// Prepends the augment vowel to a consonant-initial stem. Vowel-initial
/// stems are left alone.
fn apply_augment(stem: &str) -> String {
    if stem.is_empty() || starts_with_vowel(stem) {
        return stem.to_string();
    }
    format!("ε{stem}")
}

/// A sigmatic perfective-active stem already carries its sigma marker, so a
/// sigma-initial aorist ending would double it: the ending's leading sigma is
/// dropped instead (γράψ + σα would otherwise yield γράψσα).
fn adjust_sigmatic_ending<'a>(aorist_type: Option<AoristType>, ending: &'a str) -> &'a str {
    if aorist_type == Some(AoristType::Sigmatic) {
        if let Some(rest) = ending.strip_prefix('σ') {
            return rest;
        }
    }
    ending
}

/// Passive-aorist boundary assimilation: a tau-final stem turns the θη marker
/// into τη; if the ending already starts with τη, the ending's tau is dropped
/// so the stem's own tau carries the cluster.
fn adjust_passive_aorist_ending(stem: &str, ending: &str) -> String {
    if stem.ends_with('τ') {
        if let Some(rest) = ending.strip_prefix("θη") {
            return format!("τη{rest}");
        }
        if let Some(rest) = ending.strip_prefix('τ') {
            if rest.starts_with('η') {
                return rest.to_string();
            }
        }
    }
    ending.to_string()
}

/// Drops the stem's now-redundant trailing tau when the adjusted ending
/// starts the τη cluster itself.
fn strip_assimilated_stem(stem: &str, adjusted_ending: &str) -> String {
    if stem.ends_with('τ') && adjusted_ending.starts_with("τη") {
        let mut chars = stem.chars();
        chars.next_back();
        return chars.as_str().to_string();
    }
    stem.to_string()
}

fn resolve_stems(entry: &VerbLexiconEntry) -> ResolvedStems {
    let mut imperfective = entry.stems.imperfective.clone().unwrap_or_default();
    let mut perfective_active = entry.stems.perfective_active.clone().unwrap_or_default();
    let mut perfective_passive = entry.stems.perfective_passive.clone().unwrap_or_default();

    if imperfective.is_empty() || perfective_active.is_empty() || perfective_passive.is_empty() {
        let fallback = derive_stems_fallback(&entry.lemma);
        if imperfective.is_empty() {
            imperfective = fallback.imperfective.clone().unwrap_or_default();
        }
        if perfective_active.is_empty() {
            perfective_active = fallback.perfective_active.clone().unwrap_or_default();
        }
        if perfective_passive.is_empty() {
            perfective_passive = fallback.perfective_passive.unwrap_or_default();
        }
    }

    ResolvedStems {
        imperfective,
        perfective_active,
        perfective_passive,
    }
}

/// Enumerates the full core-indicative paradigm for one lexicon entry:
/// 4 tenses x 2 voices x 6 person/number slots, in tense-major order.
///
/// The only failure mode is an unknown class id; incomplete stem data always
/// degrades to fallback derivation and still yields 48 forms.
pub fn build_forms(entry: &VerbLexiconEntry) -> Result<Vec<GeneratedForm>, EngineError> {
    let class = get_conjugation_class(&entry.class_id)?;
    let stems = resolve_stems(entry);
    let use_augment = entry.use_augment.unwrap_or(class.use_augment);

    let mut forms = Vec::with_capacity(class.endings.len() * 12);
    for row in &class.endings {
        for voice in [Voice::Active, Voice::Passive] {
            let endings = match voice {
                Voice::Active => &row.active,
                Voice::Passive => &row.passive,
            };
            for ((person, number), raw_ending) in PERSON_NUMBER.iter().zip(endings.iter()) {
                let stem = match row.tense {
                    Tense::Present | Tense::Imperfect => stems.imperfective.as_str(),
                    Tense::Aorist | Tense::Future => match voice {
                        Voice::Passive => stems.perfective_passive.as_str(),
                        Voice::Active => stems.perfective_active.as_str(),
                    },
                };

                let mut ending = (*raw_ending).to_string();
                if row.tense == Tense::Aorist && voice == Voice::Active {
                    ending = adjust_sigmatic_ending(entry.aorist_type, &ending).to_string();
                }
                let mut stem_for_form = stem.to_string();
                if row.tense == Tense::Aorist && voice == Voice::Passive {
                    ending = adjust_passive_aorist_ending(stem, &ending);
                    stem_for_form = strip_assimilated_stem(stem, &ending);
                }

                let mut form = format!("{stem_for_form}{ending}");
                if matches!(row.tense, Tense::Imperfect | Tense::Aorist) && use_augment {
                    form = format!("{}{ending}", apply_augment(&stem_for_form));
                }
                if row.tense == Tense::Future {
                    form = format!("θα {form}");
                }
                form = apply_final_sigma(&form);

                forms.push(GeneratedForm {
                    tense: row.tense,
                    mood: Mood::Indicative,
                    voice,
                    person: *person,
                    number: *number,
                    form,
                    morphology: Morphology {
                        class_id: entry.class_id.clone(),
                        stems: stems.clone(),
                        aorist_type: entry.aorist_type,
                        use_augment,
                        override_source: None,
                    },
                });
            }
        }
    }
    Ok(forms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morph::types::{Number, Person, Stems};

    fn grafo() -> VerbLexiconEntry {
        VerbLexiconEntry {
            lemma: "γράφω".to_string(),
            class_id: "A".to_string(),
            stems: Stems {
                imperfective: Some("γράφ".to_string()),
                perfective_active: Some("γράψ".to_string()),
                perfective_passive: Some("γραφτ".to_string()),
            },
            aorist_type: Some(AoristType::Sigmatic),
            use_augment: None,
            notes: None,
            provenance: None,
        }
    }

    fn find<'a>(
        forms: &'a [GeneratedForm],
        tense: Tense,
        voice: Voice,
        person: Person,
        number: Number,
    ) -> &'a GeneratedForm {
        forms
            .iter()
            .find(|f| {
                f.tense == tense && f.voice == voice && f.person == person && f.number == number
            })
            .unwrap()
    }

    #[test]
    fn always_forty_eight_forms() {
        let forms = build_forms(&grafo()).unwrap();
        assert_eq!(forms.len(), 48);

        let bare = VerbLexiconEntry {
            lemma: "τρέχω".to_string(),
            class_id: "A".to_string(),
            stems: Stems::default(),
            aorist_type: None,
            use_augment: None,
            notes: None,
            provenance: None,
        };
        assert_eq!(build_forms(&bare).unwrap().len(), 48);
    }

    #[test]
    fn person_number_alignment_is_positional() {
        let forms = build_forms(&grafo()).unwrap();
        for block in forms.chunks(6) {
            for (form, (person, number)) in block.iter().zip(PERSON_NUMBER.iter()) {
                assert_eq!(form.person, *person);
                assert_eq!(form.number, *number);
            }
        }
    }

    #[test]
    fn present_active_matches_lemma_paradigm() {
        let forms = build_forms(&grafo()).unwrap();
        let first = find(
            &forms,
            Tense::Present,
            Voice::Active,
            Person::First,
            Number::Singular,
        );
        assert_eq!(first.form, "γράφω");
        let third_plural = find(
            &forms,
            Tense::Present,
            Voice::Active,
            Person::Third,
            Number::Plural,
        );
        assert_eq!(third_plural.form, "γράφουν");
    }

    // Regression pin: a sigmatic stem drops the ending's sigma instead of
    // doubling it.
    #[test]
    fn sigmatic_aorist_strips_doubled_sigma() {
        let forms = build_forms(&grafo()).unwrap();
        let aorist = find(
            &forms,
            Tense::Aorist,
            Voice::Active,
            Person::First,
            Number::Singular,
        );
        assert_eq!(aorist.form, "εγράψα");
        let aorist_2pl = find(
            &forms,
            Tense::Aorist,
            Voice::Active,
            Person::Second,
            Number::Plural,
        );
        assert_eq!(aorist_2pl.form, "εγράψατε");
    }

    #[test]
    fn passive_aorist_assimilates_tau_theta_boundary() {
        let forms = build_forms(&grafo()).unwrap();
        let passive = find(
            &forms,
            Tense::Aorist,
            Voice::Passive,
            Person::First,
            Number::Singular,
        );
        // γραφτ + θηκα: θη -> τη, stem tau dropped, then augment
        assert_eq!(passive.form, "εγραφτηκα");
    }

    #[test]
    fn augment_skipped_on_vowel_initial_stems() {
        let entry = VerbLexiconEntry {
            lemma: "ακούω".to_string(),
            class_id: "A".to_string(),
            stems: Stems {
                imperfective: Some("ακού".to_string()),
                perfective_active: Some("ακούσ".to_string()),
                perfective_passive: Some("ακούστ".to_string()),
            },
            aorist_type: Some(AoristType::Sigmatic),
            use_augment: None,
            notes: None,
            provenance: None,
        };
        let forms = build_forms(&entry).unwrap();
        let imperfect = find(
            &forms,
            Tense::Imperfect,
            Voice::Active,
            Person::First,
            Number::Singular,
        );
        assert_eq!(imperfect.form, "ακούα");
    }

    #[test]
    fn entry_can_disable_augment() {
        let mut entry = grafo();
        entry.use_augment = Some(false);
        let forms = build_forms(&entry).unwrap();
        let imperfect = find(
            &forms,
            Tense::Imperfect,
            Voice::Active,
            Person::First,
            Number::Singular,
        );
        assert_eq!(imperfect.form, "γράφα");
    }

    #[test]
    fn future_forms_carry_the_particle() {
        let forms = build_forms(&grafo()).unwrap();
        for form in forms.iter().filter(|f| f.tense == Tense::Future) {
            assert!(form.form.starts_with("θα "), "bad future: {}", form.form);
        }
        let first = find(
            &forms,
            Tense::Future,
            Voice::Active,
            Person::First,
            Number::Singular,
        );
        assert_eq!(first.form, "θα γράψω");
    }

    #[test]
    fn no_form_ends_in_medial_sigma() {
        for entry in [grafo()] {
            for form in build_forms(&entry).unwrap() {
                assert!(!form.form.ends_with('σ'), "medial sigma: {}", form.form);
            }
        }
    }

    #[test]
    fn forms_come_out_tense_major_active_first() {
        let forms = build_forms(&grafo()).unwrap();
        let order: Vec<(Tense, Voice)> = forms
            .iter()
            .step_by(6)
            .map(|f| (f.tense, f.voice))
            .collect();
        assert_eq!(
            order,
            vec![
                (Tense::Present, Voice::Active),
                (Tense::Present, Voice::Passive),
                (Tense::Imperfect, Voice::Active),
                (Tense::Imperfect, Voice::Passive),
                (Tense::Aorist, Voice::Active),
                (Tense::Aorist, Voice::Passive),
                (Tense::Future, Voice::Active),
                (Tense::Future, Voice::Passive),
            ]
        );
    }

    #[test]
    fn unknown_class_propagates() {
        let mut entry = grafo();
        entry.class_id = "Z9".to_string();
        assert!(matches!(
            build_forms(&entry),
            Err(EngineError::UnknownClass(_))
        ));
    }
}
