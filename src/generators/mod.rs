// src/generators/mod.rs
use thiserror::Error;

pub mod charset;
pub mod passphrase;
pub mod password;
pub mod strength;
pub mod wordlist;

pub use password::PasswordGenerator;
pub use strength::default_estimator;
pub use wordlist::{WordListCache, WordOrigin, WordSource};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("At least one character type must be included.")]
    EmptyPool,

    #[error("Word count must be at least 1.")]
    InvalidWordCount,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
