//! Test generator — a `CharacterGenerator` returning fixed strings.

use chargen_core::rng::DeterministicRng;
use chargen_generator::CharacterGenerator;

/// A generator that returns the same three strings on every call, so tests
/// can assert on exact composed output.
#[derive(Debug, Clone)]
pub struct CannedGenerator {
    /// Returned from `generate_heading`.
    pub heading: String,
    /// Returned from `generate_character`.
    pub character: String,
    /// Returned from `generate_response`.
    pub response: String,
}

impl CannedGenerator {
    /// Create a canned generator from the three fragments.
    #[must_use]
    pub fn new(heading: &str, character: &str, response: &str) -> Self {
        Self {
            heading: heading.to_owned(),
            character: character.to_owned(),
            response: response.to_owned(),
        }
    }
}

impl CharacterGenerator for CannedGenerator {
    fn generate_heading(&self, _rng: &mut dyn DeterministicRng) -> String {
        self.heading.clone()
    }

    fn generate_character(&self, _rng: &mut dyn DeterministicRng) -> String {
        self.character.clone()
    }

    fn generate_response(&self, _rng: &mut dyn DeterministicRng) -> String {
        self.response.clone()
    }
}
