//! Command-line surface.

use clap::Parser;

use crate::entropy::EntropySource;
use crate::pass::{CharacterClass, ClassSet, GenerationConfig};

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "passgen",
    version,
    about = "Random password generator",
    long_about = r#"
Generates random passwords from any mix of uppercase letters, lowercase
letters, digits and symbols.

Run without arguments (or with --interactive) to open the terminal UI:
pick a length, toggle character classes, generate and copy.

Examples:
  passgen -l 16              one 16-character password
  passgen -l 20 -n 5         five 20-character passwords
  passgen --symbols -b       copy a password with symbols to the clipboard
  passgen --no-upper --no-lower -l 6
"#
)]
pub struct Args {
    /// Characters per password
    #[arg(short, long, env = "PASSGEN_LENGTH", default_value_t = 12)]
    pub length: usize,

    /// Exclude uppercase letters (A-Z)
    #[arg(long)]
    pub no_upper: bool,

    /// Exclude lowercase letters (a-z)
    #[arg(long)]
    pub no_lower: bool,

    /// Exclude digits (0-9)
    #[arg(long)]
    pub no_digits: bool,

    /// Include symbols (!@#$%^&* ...)
    #[arg(short, long)]
    pub symbols: bool,

    /// How many passwords to generate
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Draw from the operating system generator
    #[arg(long, conflicts_with = "seed")]
    pub os_rng: bool,

    /// Seed a reproducible generator (not for real passwords)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Open the terminal UI even when other flags are given
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    pub fn config(&self) -> GenerationConfig {
        let mut classes = ClassSet::empty();
        classes.set(CharacterClass::Upper, !self.no_upper);
        classes.set(CharacterClass::Lower, !self.no_lower);
        classes.set(CharacterClass::Digit, !self.no_digits);
        classes.set(CharacterClass::Symbol, self.symbols);
        GenerationConfig::new(self.length, classes)
    }

    pub fn source(&self) -> EntropySource {
        match (self.seed, self.os_rng) {
            (Some(seed), _) => EntropySource::Seeded(seed),
            (None, true) => EntropySource::Os,
            (None, false) => EntropySource::Thread,
        }
    }
}
