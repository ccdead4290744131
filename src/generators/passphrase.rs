// src/generators/passphrase.rs
use rand_core::{CryptoRng, RngCore};

use crate::crypto::SecureRandom;
use crate::models::PassphraseOptions;
use super::wordlist::WordList;
use super::{GeneratorError, Result};

/// Symbols that may close a passphrase.
pub const SUFFIX_SYMBOLS: &str = "!@#$%^&*";

/// Upper bound (exclusive) of the numeric suffix.
pub const SUFFIX_NUMBER_RANGE: u32 = 10_000;

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a passphrase from `words`.
///
/// Words are drawn with replacement. The optional number suffix is
/// rendered without zero padding, so it has between one and four digits.
/// When both suffixes are requested the number comes first, and each one
/// is preceded by its own separator.
pub fn generate_passphrase<R: RngCore + CryptoRng>(
    words: &WordList,
    options: &PassphraseOptions,
    random: &mut SecureRandom<R>,
) -> Result<String> {
    if options.word_count == 0 {
        return Err(GeneratorError::InvalidWordCount);
    }

    let chosen: Vec<String> = (0..options.word_count)
        .map(|_| {
            let word = words.get(random.random_index(words.len()));
            if options.capitalize {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect();

    let mut passphrase = chosen.join(&options.separator);

    if options.append_number {
        passphrase.push_str(&options.separator);
        passphrase.push_str(&random.random_int(SUFFIX_NUMBER_RANGE).to_string());
    }

    if options.append_symbol {
        let symbols: Vec<char> = SUFFIX_SYMBOLS.chars().collect();
        passphrase.push_str(&options.separator);
        passphrase.push(symbols[random.random_index(symbols.len())]);
    }

    Ok(passphrase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn options(word_count: usize, separator: &str) -> PassphraseOptions {
        PassphraseOptions {
            word_count,
            separator: separator.to_string(),
            capitalize: false,
            append_number: false,
            append_symbol: false,
        }
    }

    #[test]
    fn four_capitalized_words_and_a_number() {
        let words = WordList::fallback();
        let opts = PassphraseOptions {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            append_number: true,
            append_symbol: false,
        };
        let mut random = SecureRandom::new();

        for _ in 0..200 {
            let passphrase = generate_passphrase(&words, &opts, &mut random).unwrap();
            let segments: Vec<&str> = passphrase.split('-').collect();

            assert_eq!(segments.len(), 5, "{}", passphrase);
            for word in &segments[..4] {
                let mut chars = word.chars();
                assert!(chars.next().unwrap().is_ascii_uppercase());
                assert!(chars.all(|c| c.is_ascii_lowercase()));
                assert!(words.contains(&word.to_lowercase()));
            }

            let number = segments[4];
            assert!((1..=4).contains(&number.len()));
            assert!(number.chars().all(|c| c.is_ascii_digit()));
            assert!(number.parse::<u32>().unwrap() <= 9999);
        }
    }

    #[test]
    fn number_is_not_zero_padded() {
        let words = WordList::fallback();
        let opts = PassphraseOptions {
            append_number: true,
            ..options(1, " ")
        };
        let mut random = SecureRandom::from_rng(ChaCha20Rng::seed_from_u64(3));

        for _ in 0..500 {
            let passphrase = generate_passphrase(&words, &opts, &mut random).unwrap();
            let number = passphrase.rsplit(' ').next().unwrap();
            assert!(number == "0" || !number.starts_with('0'), "{}", passphrase);
        }
    }

    #[test]
    fn number_suffix_precedes_symbol_suffix() {
        let words = WordList::fallback();
        let opts = PassphraseOptions {
            append_number: true,
            append_symbol: true,
            ..options(3, ".")
        };
        let mut random = SecureRandom::new();

        let passphrase = generate_passphrase(&words, &opts, &mut random).unwrap();
        let segments: Vec<&str> = passphrase.split('.').collect();

        assert_eq!(segments.len(), 5);
        assert!(segments[3].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(segments[4].chars().count(), 1);
        assert!(SUFFIX_SYMBOLS.contains(segments[4]));
    }

    #[test]
    fn empty_separator_concatenates() {
        let words = WordList::fallback();
        let mut random = SecureRandom::new();

        let passphrase = generate_passphrase(&words, &options(3, ""), &mut random).unwrap();

        assert!(passphrase.chars().all(|c| c.is_ascii_lowercase()));
        assert!(passphrase.len() >= 9);
    }

    #[test]
    fn words_repeat_with_single_word_list() {
        let words = WordList::parse("onlyword\n").unwrap();
        let mut random = SecureRandom::new();

        let passphrase = generate_passphrase(&words, &options(3, "-"), &mut random).unwrap();

        assert_eq!(passphrase, "onlyword-onlyword-onlyword");
    }

    #[test]
    fn capitalize_touches_only_first_letter() {
        assert_eq!(capitalize("maple"), "Maple");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn zero_words_is_rejected() {
        let words = WordList::fallback();
        let mut random = SecureRandom::new();
        assert_eq!(
            generate_passphrase(&words, &options(0, "-"), &mut random),
            Err(GeneratorError::InvalidWordCount)
        );
    }
}
