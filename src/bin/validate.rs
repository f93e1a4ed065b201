//! Cross-checks the generator against the irregular-override list: for every
//! lexicon entry that has an override, the generated aorist-active
//! 1st-singular must equal the attested form. Exits non-zero on mismatch.

use std::env;
use std::path::Path;
use std::process::exit;

use conjugator_core::lexicon::is_placeholder;
use conjugator_core::morph::{Number, Person, Tense, Voice};
use conjugator_core::text::normalize_lemma;
use conjugator_core::ConjugationEngine;

const DEFAULT_LEXICON: &str = "data/verb_lexicon.json";
const DEFAULT_IRREGULARS: &str = "data/philologist_irregulars.json";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let lexicon_path = args.get(1).map_or(DEFAULT_LEXICON, String::as_str);
    let irregulars_path = args.get(2).map_or(DEFAULT_IRREGULARS, String::as_str);

    let engine = match ConjugationEngine::from_files(
        Path::new(lexicon_path),
        Some(Path::new(irregulars_path)),
    ) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            exit(1);
        }
    };

    let mut checked = 0usize;
    let mut mismatches = 0usize;

    for entry in engine.lexicon().values() {
        let key = normalize_lemma(&entry.lemma);
        let Some(irregular) = engine.irregulars().get(&key) else {
            continue;
        };
        let Some(expected) = irregular.aorist_active.as_deref() else {
            continue;
        };
        if is_placeholder(expected) {
            continue;
        }
        checked += 1;

        let forms = match engine.generate(&entry.lemma) {
            Ok(forms) => forms,
            Err(e) => {
                eprintln!("[ERROR] {}: {e}", entry.lemma);
                mismatches += 1;
                continue;
            }
        };
        let generated = forms
            .iter()
            .find(|f| {
                f.tense == Tense::Aorist
                    && f.voice == Voice::Active
                    && f.person == Person::First
                    && f.number == Number::Singular
            })
            .map(|f| f.form.as_str());

        if generated != Some(expected) {
            mismatches += 1;
            println!(
                "Mismatch {}: expected {expected} got {}",
                entry.lemma,
                generated.unwrap_or("<none>")
            );
        }
    }

    println!("Checked {checked} irregulars; mismatches={mismatches}");
    if mismatches > 0 {
        exit(1);
    }
}
