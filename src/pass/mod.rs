//! Password generation core.

mod charset;
mod config;
mod error;
mod generate;

pub use charset::{Alphabet, CharacterClass, ClassSet};
pub use config::GenerationConfig;
pub use error::ConfigError;
pub use generate::{Password, generate, generate_batch, generate_with, validate};
