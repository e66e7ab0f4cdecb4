//! Password generation.

use std::fmt;

use zeroize::Zeroize;

use super::charset::Alphabet;
use super::config::GenerationConfig;
use super::error::ConfigError;
use crate::entropy::Sampler;

/// Generated password. The buffer is wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&self.0).finish()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Build the alphabet for `config`, rejecting an empty class selection.
pub fn validate(config: &GenerationConfig) -> Result<Alphabet, ConfigError> {
    let alphabet = Alphabet::build(&config.classes);
    if alphabet.is_empty() {
        return Err(ConfigError::NoClassSelected);
    }
    Ok(alphabet)
}

/// Generate one password with the thread-local generator.
pub fn generate(config: &GenerationConfig) -> Result<Password, ConfigError> {
    generate_with(config, &mut rand::rng())
}

/// Generate one password, drawing every character from `sampler`.
pub fn generate_with<S>(config: &GenerationConfig, sampler: &mut S) -> Result<Password, ConfigError>
where
    S: Sampler + ?Sized,
{
    let alphabet = validate(config).inspect_err(|_| {
        tracing::warn!(length = config.length, "rejected config: no character class selected");
    })?;

    tracing::debug!(length = config.length, alphabet = alphabet.len(), "generating password");
    Ok(draw(&alphabet, config.length, sampler))
}

/// Generate `count` passwords from one validated alphabet.
pub fn generate_batch<S>(
    config: &GenerationConfig,
    count: usize,
    sampler: &mut S,
) -> Result<Vec<Password>, ConfigError>
where
    S: Sampler + ?Sized,
{
    let alphabet = validate(config)?;

    tracing::debug!(
        count,
        length = config.length,
        alphabet = alphabet.len(),
        "generating batch"
    );
    Ok((0..count)
        .map(|_| draw(&alphabet, config.length, sampler))
        .collect())
}

fn draw<S>(alphabet: &Alphabet, length: usize, sampler: &mut S) -> Password
where
    S: Sampler + ?Sized,
{
    let chars = alphabet.as_slice();
    let mut out = String::with_capacity(length);
    for _ in 0..length {
        out.push(chars[sampler.sample_index(chars.len())]);
    }
    Password(out)
}
