use std::sync::OnceLock;

use crate::errors::EngineError;
use crate::morph::types::Tense;

/// Ending rows for one tense, positionally aligned to
/// [`crate::morph::types::PERSON_NUMBER`].
#[derive(Debug, Clone)]
pub struct TenseEndings {
    pub tense: Tense,
    pub active: [&'static str; 6],
    pub passive: [&'static str; 6],
}

/// An immutable conjugation class: a description and its ending tables.
/// The three built-in classes are constructed once at first use and never
/// mutated, so shared references are safe across threads.
#[derive(Debug, Clone)]
pub struct ConjugationClass {
    pub class_id: &'static str,
    pub description: &'static str,
    pub endings: Vec<TenseEndings>,
    pub use_augment: bool,
}

fn group_a_endings() -> Vec<TenseEndings> {
    vec![
        TenseEndings {
            tense: Tense::Present,
            active: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
            passive: ["ομαι", "εσαι", "εται", "ομαστε", "εστε", "ονται"],
        },
        TenseEndings {
            tense: Tense::Imperfect,
            active: ["α", "ες", "ε", "αμε", "ατε", "αν"],
            passive: ["ομουν", "οσουν", "οταν", "ομασταν", "οσασταν", "ονταν"],
        },
        TenseEndings {
            tense: Tense::Aorist,
            active: ["σα", "σες", "σε", "σαμε", "σατε", "σαν"],
            passive: ["θηκα", "θηκες", "θηκε", "θηκαμε", "θηκατε", "θηκαν"],
        },
        TenseEndings {
            tense: Tense::Future,
            active: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
            passive: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
        },
    ]
}

fn group_b1_endings() -> Vec<TenseEndings> {
    vec![
        TenseEndings {
            tense: Tense::Present,
            active: ["ω", "ας", "α", "αμε", "ατε", "ουν"],
            passive: ["ιεμαι", "ιεσαι", "ιεται", "ιομαστε", "ιεστε", "ιουνται"],
        },
        TenseEndings {
            tense: Tense::Imperfect,
            active: ["αγα", "αγες", "αγε", "αγαμε", "αγατε", "αγαν"],
            passive: ["ιομουν", "ιοσουν", "ιοταν", "ιομασταν", "ιοσασταν", "ιονταν"],
        },
        TenseEndings {
            tense: Tense::Aorist,
            active: ["ησα", "ησες", "ησε", "ησαμε", "ησατε", "ησαν"],
            passive: ["ηθηκα", "ηθηκες", "ηθηκε", "ηθηκαμε", "ηθηκατε", "ηθηκαν"],
        },
        TenseEndings {
            tense: Tense::Future,
            active: ["ω", "ας", "α", "αμε", "ατε", "ουν"],
            passive: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
        },
    ]
}

fn group_b2_endings() -> Vec<TenseEndings> {
    vec![
        TenseEndings {
            tense: Tense::Present,
            active: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
            passive: ["ουμαι", "εισαι", "ειται", "ουμαστε", "ειστε", "ουνται"],
        },
        TenseEndings {
            tense: Tense::Imperfect,
            active: ["ουσα", "ουσες", "ουσε", "ουσαμε", "ουσατε", "ουσαν"],
            passive: ["ουμουν", "ουσουν", "ουταν", "ουμασταν", "ουσασταν", "ουνταν"],
        },
        TenseEndings {
            tense: Tense::Aorist,
            active: ["ησα", "ησες", "ησε", "ησαμε", "ησατε", "ησαν"],
            passive: ["ηθηκα", "ηθηκες", "ηθηκε", "ηθηκαμε", "ηθηκατε", "ηθηκαν"],
        },
        TenseEndings {
            tense: Tense::Future,
            active: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
            passive: ["ω", "εις", "ει", "ουμε", "ετε", "ουν"],
        },
    ]
}

fn registry() -> &'static Vec<ConjugationClass> {
    static CLASSES: OnceLock<Vec<ConjugationClass>> = OnceLock::new();
    CLASSES.get_or_init(|| {
        vec![
            ConjugationClass {
                class_id: "A",
                description: "Group A (non-accented -ω)",
                endings: group_a_endings(),
                use_augment: true,
            },
            ConjugationClass {
                class_id: "B1",
                description: "Group B1 (accented -άω/-ώ)",
                endings: group_b1_endings(),
                use_augment: true,
            },
            ConjugationClass {
                class_id: "B2",
                description: "Group B2 (accented -ώ with -είς)",
                endings: group_b2_endings(),
                use_augment: true,
            },
        ]
    })
}

/// Looks up a built-in conjugation class by id (A, B1, B2).
pub fn get_conjugation_class(class_id: &str) -> Result<&'static ConjugationClass, EngineError> {
    registry()
        .iter()
        .find(|class| class.class_id == class_id)
        .ok_or_else(|| EngineError::UnknownClass(class_id.to_string()))
}
