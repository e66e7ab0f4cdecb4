//! Character classes and alphabet assembly.

use std::fmt;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:',.<>?/";

/// A fixed group of characters that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Canonical order used when concatenating an alphabet.
    pub const ALL: [CharacterClass; 4] = [Self::Upper, Self::Lower, Self::Digit, Self::Symbol];

    pub const fn chars(self) -> &'static str {
        match self {
            Self::Upper => UPPERCASE,
            Self::Lower => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upper => "Uppercase Letters",
            Self::Lower => "Lowercase Letters",
            Self::Digit => "Numbers",
            Self::Symbol => "Symbols",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of enabled classes. Iteration always follows [`CharacterClass::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.0 |= class.bit();
        } else {
            self.0 &= !class.bit();
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = Self::empty();
        for class in iter {
            set.set(class, true);
        }
        set
    }
}

/// Characters eligible for sampling, in canonical class order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(Vec<char>);

impl Alphabet {
    /// Concatenate the strings of every class in `classes`.
    pub fn build(classes: &ClassSet) -> Self {
        let mut chars = Vec::new();
        for class in classes.iter() {
            chars.extend(class.chars().chars());
        }
        Self(chars)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}
