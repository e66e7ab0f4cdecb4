//! Randomness sources for password generation.

mod sampler;
mod source;

pub use sampler::Sampler;
pub use source::EntropySource;
