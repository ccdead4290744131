// src/generators/password.rs
use rand_core::{CryptoRng, RngCore};

use crate::crypto::SecureRandom;
use crate::models::{EstimationMode, PassphraseOptions, StringOptions, StrengthResult};
use super::charset::CharacterPool;
use super::strength::{estimate_strength, StrengthEstimator};
use super::wordlist::WordList;
use super::Result;

/// Draw `length` characters independently and uniformly from `pool`.
pub fn generate<R: RngCore + CryptoRng>(
    pool: &CharacterPool,
    length: usize,
    random: &mut SecureRandom<R>,
) -> String {
    (0..length)
        .filter_map(|_| pool.get(random.random_index(pool.len())))
        .collect()
}

/// Generate a string-mode password from the OS generator.
pub fn generate_string(options: &StringOptions) -> Result<String> {
    let pool = CharacterPool::build(options)?;
    let mut random = SecureRandom::new();
    Ok(generate(&pool, options.length, &mut random))
}

/// Entry point shared by the HTTP handlers and the CLI.
///
/// Holds the strength estimator chosen at startup so every caller scores
/// candidates the same way.
pub struct PasswordGenerator {
    estimator: Box<dyn StrengthEstimator>,
}

impl PasswordGenerator {
    pub fn new(estimator: Box<dyn StrengthEstimator>) -> Self {
        PasswordGenerator { estimator }
    }

    pub fn generate_password(&self, options: &StringOptions) -> Result<String> {
        generate_string(options)
    }

    pub fn generate_passphrase(&self, words: &WordList, options: &PassphraseOptions) -> Result<String> {
        let mut random = SecureRandom::new();
        super::passphrase::generate_passphrase(words, options, &mut random)
    }

    pub fn analyze_password_strength(&self, candidate: &str, mode: EstimationMode) -> StrengthResult {
        estimate_strength(self.estimator.as_ref(), candidate, mode)
    }

    pub fn estimator_name(&self) -> &'static str {
        self.estimator.name()
    }
}
