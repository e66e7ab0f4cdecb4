use std::collections::HashMap;

use passgen::{
    CharacterClass, ClassSet, ConfigError, EntropySource, GenerationConfig, generate,
    generate_with, validate,
};

fn classes(list: &[CharacterClass]) -> ClassSet {
    list.iter().copied().collect()
}

#[test]
fn twelve_alphanumeric_characters() {
    let cfg = GenerationConfig::new(
        12,
        classes(&[CharacterClass::Upper, CharacterClass::Lower, CharacterClass::Digit]),
    );
    let password = generate(&cfg).unwrap();
    assert_eq!(password.len(), 12);
    assert!(password.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn nothing_selected_is_an_error() {
    let cfg = GenerationConfig::new(10, ClassSet::empty());
    assert_eq!(generate(&cfg), Err(ConfigError::NoClassSelected));
}

#[test]
fn zero_length_is_not_an_error() {
    let cfg = GenerationConfig::new(0, classes(&[CharacterClass::Upper]));
    assert!(generate(&cfg).unwrap().is_empty());
}

#[test]
fn every_symbol_is_reachable() {
    let cfg = GenerationConfig::new(4000, classes(&[CharacterClass::Symbol]));
    let mut sampler = EntropySource::Seeded(77).sampler();
    let password = generate_with(&cfg, &mut *sampler).unwrap();

    let mut seen: HashMap<char, usize> = HashMap::new();
    for c in password.as_str().chars() {
        *seen.entry(c).or_default() += 1;
    }
    assert_eq!(seen.len(), CharacterClass::Symbol.chars().len());
    assert!(seen.keys().all(|c| CharacterClass::Symbol.chars().contains(*c)));
}

#[test]
fn validate_matches_generation_alphabet() {
    let cfg = GenerationConfig::new(300, classes(&[CharacterClass::Digit, CharacterClass::Lower]));
    let alphabet = validate(&cfg).unwrap();
    assert_eq!(alphabet.len(), 36);

    let password = generate(&cfg).unwrap();
    assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
}
