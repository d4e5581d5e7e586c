//! Chargen Generator — randomized character text production.
//!
//! Produces the three text fragments a generation turn needs: a heading,
//! a character description, and a short reaction line. All randomness
//! flows through the injected [`DeterministicRng`], so output is fully
//! scriptable in tests.

mod generator;
mod tables;

pub use generator::PhraseTableGenerator;
pub use tables::PhraseTables;

use chargen_core::rng::DeterministicRng;
use thiserror::Error;

/// Errors raised while loading phrase tables.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The YAML document could not be parsed.
    #[error("phrase table parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A phrase table contained no entries.
    #[error("phrase table '{0}' is empty")]
    EmptyTable(&'static str),
}

/// Producer of character text fragments.
pub trait CharacterGenerator: Send + Sync {
    /// A heading that introduces the character, ending in an article
    /// (for example "The dice have spoken, it's a").
    fn generate_heading(&self, rng: &mut dyn DeterministicRng) -> String;

    /// A character description that reads naturally after a heading
    /// (for example "chaotic evil half-orc bard who cries during bar
    /// fights").
    fn generate_character(&self, rng: &mut dyn DeterministicRng) -> String;

    /// A short reaction line spoken before the follow-up question.
    fn generate_response(&self, rng: &mut dyn DeterministicRng) -> String;
}
