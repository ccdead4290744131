// src/generators/charset.rs
use crate::models::{CharacterCategory, StringOptions};
use super::{GeneratorError, Result};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Glyphs that are easy to confuse with one another.
pub const AMBIGUOUS: &str = "Il1O0";

fn alphabet(category: CharacterCategory) -> &'static str {
    match category {
        CharacterCategory::Lower => LOWERCASE,
        CharacterCategory::Upper => UPPERCASE,
        CharacterCategory::Digit => DIGITS,
        CharacterCategory::Symbol => SYMBOLS,
    }
}

/// Characters eligible for one string-mode request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

// Never empty: `build` rejects an empty pool.
#[allow(clippy::len_without_is_empty)]
impl CharacterPool {
    /// Build the pool for the enabled categories.
    ///
    /// Alphabets are concatenated in the order lower, upper, digits,
    /// symbols. An empty pool is an error so that a bad configuration is
    /// never papered over with a default alphabet.
    pub fn build(options: &StringOptions) -> Result<Self> {
        let mut chars: Vec<char> = CharacterCategory::ORDER
            .iter()
            .filter(|category| options.includes(**category))
            .flat_map(|category| alphabet(*category).chars())
            .collect();

        // Remove similar characters if requested
        if options.avoid_ambiguous {
            chars.retain(|c| !AMBIGUOUS.contains(*c));
        }

        if chars.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }

        Ok(CharacterPool { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}
