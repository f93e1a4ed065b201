pub mod engine;
pub mod errors;
pub mod lexicon;
pub mod morph;
pub mod text;

pub use crate::engine::{generate_conjugations, ConjugationEngine};
pub use crate::errors::EngineError;
