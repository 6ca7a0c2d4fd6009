//! Random short code sampling.
//!
//! Produces candidate codes only; uniqueness is checked by
//! [`crate::application::services::CodeGenerator`].

use rand::{CryptoRng, Rng};

/// Characters a short code is drawn from.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 7;

/// Generates a random 7-character code from the thread-local CSPRNG.
///
/// # Examples
///
/// ```ignore
/// let code = random_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn random_code() -> String {
    random_code_with(&mut rand::rng())
}

/// Random bytes at or above this bound are redrawn. 252 is the largest
/// multiple of 36 that fits in a byte, so `byte % 36` is exactly uniform
/// over the accepted range.
const ACCEPT_BELOW: u8 = (u8::MAX as usize / ALPHABET.len() * ALPHABET.len()) as u8;

/// Generates a random code from the given cryptographically secure RNG.
///
/// Each character is drawn independently by rejection sampling over
/// random bytes.
pub fn random_code_with<R: CryptoRng>(rng: &mut R) -> String {
    (0..CODE_LENGTH).map(|_| random_symbol(rng) as char).collect()
}

fn random_symbol<R: CryptoRng>(rng: &mut R) -> u8 {
    loop {
        let byte: u8 = rng.random();
        if byte < ACCEPT_BELOW {
            return ALPHABET[usize::from(byte) % ALPHABET.len()];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashMap, HashSet};

    fn is_well_formed(code: &str) -> bool {
        code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
    }

    #[test]
    fn test_alphabet_is_lowercase_and_digits() {
        assert!(
            ALPHABET
                .iter()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        );
        let distinct: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(distinct.len(), 36);
    }

    #[test]
    fn test_accepted_bytes_cover_alphabet_evenly() {
        assert_eq!(ACCEPT_BELOW, 252);
        assert_eq!(usize::from(ACCEPT_BELOW) % ALPHABET.len(), 0);

        let mut hits = [0usize; 36];
        for byte in 0..ACCEPT_BELOW {
            hits[usize::from(byte) % ALPHABET.len()] += 1;
        }
        assert!(hits.iter().all(|&n| n == 7));
    }

    #[test]
    fn test_random_code_has_correct_length() {
        assert_eq!(random_code().len(), 7);
    }

    #[test]
    fn test_random_code_only_uses_alphabet() {
        for _ in 0..1000 {
            let code = random_code();
            assert!(is_well_formed(&code), "unexpected code {code:?}");
        }
    }

    #[test]
    fn test_random_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| random_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = random_code_with(&mut StdRng::seed_from_u64(42));
        let b = random_code_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(is_well_formed(&a));
    }

    #[test]
    fn test_every_symbol_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<char, usize> = HashMap::new();

        for _ in 0..2000 {
            for c in random_code_with(&mut rng).chars() {
                *counts.entry(c).or_default() += 1;
            }
        }

        // 14000 draws over 36 symbols, roughly 389 each
        assert_eq!(counts.len(), 36);
        assert!(counts.values().all(|&n| n > 250 && n < 550));
    }
}
