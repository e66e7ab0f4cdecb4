//! Generation parameters.

use super::charset::{CharacterClass, ClassSet};

/// Parameters for one generation call. Owned and mutated by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 12,
            classes: [
                CharacterClass::Upper,
                CharacterClass::Lower,
                CharacterClass::Digit,
            ]
            .into_iter()
            .collect(),
        }
    }
}
