//! Phrase-table loading and validation.

use serde::Deserialize;

use crate::GeneratorError;

const BUILTIN_YAML: &str = include_str!("../data/phrases.yaml");

/// The phrase tables a [`crate::PhraseTableGenerator`] draws from.
#[derive(Debug, Clone, Deserialize)]
pub struct PhraseTables {
    /// Headings that introduce a character, ending in an article.
    pub headings: Vec<String>,
    /// Personality/alignment descriptors.
    pub descriptors: Vec<String>,
    /// Character races.
    pub races: Vec<String>,
    /// Character classes.
    pub classes: Vec<String>,
    /// "who ..." story hooks.
    pub hooks: Vec<String>,
    /// Short reaction lines spoken before the follow-up question.
    pub reactions: Vec<String>,
}

impl PhraseTables {
    /// Parses phrase tables from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Parse`] on malformed YAML and
    /// [`GeneratorError::EmptyTable`] if any table has no entries.
    pub fn from_yaml(yaml: &str) -> Result<Self, GeneratorError> {
        let tables: Self = serde_yaml::from_str(yaml)?;
        tables.validate()?;
        Ok(tables)
    }

    /// The tables embedded in the binary.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_yaml(BUILTIN_YAML).expect("embedded phrase tables are valid")
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        let tables: [(&'static str, &[String]); 6] = [
            ("headings", &self.headings),
            ("descriptors", &self.descriptors),
            ("races", &self.races),
            ("classes", &self.classes),
            ("hooks", &self.hooks),
            ("reactions", &self.reactions),
        ];
        for (name, entries) in tables {
            if entries.is_empty() {
                return Err(GeneratorError::EmptyTable(name));
            }
        }
        Ok(())
    }
}
