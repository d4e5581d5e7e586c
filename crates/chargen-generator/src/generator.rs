//! Phrase-table implementation of the character generator.

use chargen_core::rng::{DeterministicRng, pick};

use crate::CharacterGenerator;
use crate::tables::PhraseTables;

/// Character generator that combines phrases from loaded tables.
#[derive(Debug, Clone)]
pub struct PhraseTableGenerator {
    tables: PhraseTables,
}

impl PhraseTableGenerator {
    /// Creates a generator over validated phrase tables.
    #[must_use]
    pub fn new(tables: PhraseTables) -> Self {
        tracing::debug!(
            headings = tables.headings.len(),
            hooks = tables.hooks.len(),
            "loaded phrase tables"
        );
        Self { tables }
    }

    /// Creates a generator over the embedded tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(PhraseTables::builtin())
    }
}

impl CharacterGenerator for PhraseTableGenerator {
    fn generate_heading(&self, rng: &mut dyn DeterministicRng) -> String {
        pick(rng, &self.tables.headings).to_owned()
    }

    fn generate_character(&self, rng: &mut dyn DeterministicRng) -> String {
        let descriptor = pick(rng, &self.tables.descriptors);
        let race = pick(rng, &self.tables.races);
        let class = pick(rng, &self.tables.classes);
        let hook = pick(rng, &self.tables.hooks);
        format!("{descriptor} {race} {class} {hook}")
    }

    fn generate_response(&self, rng: &mut dyn DeterministicRng) -> String {
        pick(rng, &self.tables.reactions).to_owned()
    }
}
