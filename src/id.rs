//! Identifier generation for new records.

use rand::Rng;

/// Characters an identifier is drawn from.
pub const ALPHABET: &[u8] =
    b"0123456789abcdefghijklmnopqrstuvwxyz!@#$%^&*()ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of characters in a generated identifier.
pub const ID_LENGTH: usize = 13;

/// Source of fresh primary-key values.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier.
    fn generate(&self) -> String;
}

/// Pseudo-random identifiers of [`ID_LENGTH`] characters from [`ALPHABET`].
///
/// Uniqueness is probabilistic only; nothing checks a value against stored keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..ID_LENGTH)
            .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections;

    #[test]
    fn test_generate_length_and_alphabet() {
        for _ in 0..100 {
            let id = RandomIdGenerator.generate();
            assert_eq!(id.chars().count(), ID_LENGTH);
            assert!(id.bytes().all(|byte| ALPHABET.contains(&byte)), "{id}");
        }
    }

    #[test]
    fn test_generate_frequencies_are_not_skewed() {
        let samples = 4_000;
        let mut counts: collections::HashMap<u8, usize> = collections::HashMap::new();
        for _ in 0..samples {
            for byte in RandomIdGenerator.generate().bytes() {
                *counts.entry(byte).or_default() += 1;
            }
        }
        // 52_000 draws over 72 characters: about 722 expected per character
        let expected = samples * ID_LENGTH / ALPHABET.len();
        for &byte in ALPHABET {
            let count = counts.get(&byte).copied().unwrap_or(0);
            assert!(count > expected / 2, "{} drawn {count} times", byte as char);
            assert!(count < expected * 2, "{} drawn {count} times", byte as char);
        }
    }

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let unique: collections::HashSet<u8> = ALPHABET.iter().copied().collect();
        assert_eq!(unique.len(), ALPHABET.len());
        assert_eq!(ALPHABET.len(), 72);
    }
}
