//! Random password generator.
//!
//! The core is [`pass`]: a [`GenerationConfig`] names a length and a set of
//! [`CharacterClass`]es, [`validate`] turns it into an [`Alphabet`], and
//! [`generate`] draws each character uniformly from that alphabet.
//!
//! ```
//! use passgen::{CharacterClass, ClassSet, GenerationConfig, generate};
//!
//! let classes: ClassSet = [CharacterClass::Lower, CharacterClass::Digit].into_iter().collect();
//! let password = generate(&GenerationConfig::new(16, classes)).unwrap();
//! assert_eq!(password.len(), 16);
//! ```
//!
//! The binary wraps the core in an interactive window ([`tui`]) and a flag
//! driven mode ([`cli`]).

pub mod cli;
pub mod clipboard;
pub mod entropy;
pub mod exits;
pub mod logging;
pub mod pass;
pub mod terminal;
pub mod tui;

pub use entropy::{EntropySource, Sampler};
pub use pass::{
    Alphabet, CharacterClass, ClassSet, ConfigError, GenerationConfig, Password, generate,
    generate_batch, generate_with, validate,
};
