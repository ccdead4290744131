// src/generators/strength.rs
use std::collections::HashSet;
use std::panic::{self, UnwindSafe};

use log::{debug, warn};

use crate::core::config::ScorerChoice;
use crate::models::{EstimationMode, StrengthLabel, StrengthResult};
use super::passphrase::{SUFFIX_NUMBER_RANGE, SUFFIX_SYMBOLS};

/// Score and feedback for one candidate, before entropy and labelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assessment {
    pub score: u8,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// Scores candidates on the 0-4 scale.
pub trait StrengthEstimator: Send + Sync {
    fn name(&self) -> &'static str;

    fn assess(&self, candidate: &str) -> Assessment;
}

/// Run a scorer, turning a panic into a zero score with no feedback.
fn guarded<F>(scorer: F) -> Assessment
where
    F: FnOnce() -> Assessment + UnwindSafe,
{
    match panic::catch_unwind(scorer) {
        Ok(assessment) => assessment,
        Err(_) => {
            warn!("⚠️ Strength scorer failed, reporting score 0");
            Assessment::default()
        }
    }
}

/// Delegates to the zxcvbn pattern-matching scorer.
#[cfg(feature = "zxcvbn")]
pub struct ZxcvbnEstimator;

#[cfg(feature = "zxcvbn")]
impl StrengthEstimator for ZxcvbnEstimator {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn assess(&self, candidate: &str) -> Assessment {
        guarded(|| {
            let entropy = zxcvbn::zxcvbn(candidate, &[]);
            let (warning, suggestions) = match entropy.feedback() {
                Some(feedback) => (
                    feedback.warning().map(|w| w.to_string()),
                    feedback.suggestions().iter().map(|s| s.to_string()).collect(),
                ),
                None => (None, Vec::new()),
            };

            Assessment {
                score: u8::from(entropy.score()),
                warning,
                suggestions,
            }
        })
    }
}

/// Length and character-variety heuristic used when no scorer is built in.
pub struct HeuristicEstimator;

struct Variety {
    lower: bool,
    upper: bool,
    digit: bool,
    symbol: bool,
}

impl Variety {
    fn of(candidate: &str) -> Self {
        Variety {
            lower: candidate.chars().any(|c| c.is_ascii_lowercase()),
            upper: candidate.chars().any(|c| c.is_ascii_uppercase()),
            digit: candidate.chars().any(|c| c.is_ascii_digit()),
            symbol: candidate.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    fn count(&self) -> u8 {
        [self.lower, self.upper, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count() as u8
    }
}

fn length_bucket(length: usize) -> u8 {
    if length >= 12 {
        2
    } else if length >= 8 {
        1
    } else {
        0
    }
}

// Runs of three ascending letters ("abc") or digits ("123")
fn consecutive_run(candidate: &str) -> Option<&'static str> {
    let chars: Vec<char> = candidate.chars().collect();
    chars.windows(3).find_map(|w| {
        let ascending = w[1] as u32 == w[0] as u32 + 1 && w[2] as u32 == w[1] as u32 + 1;
        if !ascending {
            None
        } else if w.iter().all(|c| c.is_ascii_alphabetic()) {
            Some("Avoid using consecutive letters (e.g., 'abc')")
        } else if w.iter().all(|c| c.is_ascii_digit()) {
            Some("Avoid using consecutive numbers (e.g., '123')")
        } else {
            None
        }
    })
}

impl StrengthEstimator for HeuristicEstimator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn assess(&self, candidate: &str) -> Assessment {
        let length = candidate.chars().count();
        let variety = Variety::of(candidate);
        let score = (length_bucket(length) + variety.count().saturating_sub(1)).min(4);

        let mut suggestions = Vec::new();
        if length < 12 {
            suggestions.push("Increase password length to at least 12 characters".to_string());
        }
        if !variety.lower {
            suggestions.push("Add lowercase letters for better security".to_string());
        }
        if !variety.upper {
            suggestions.push("Add uppercase letters for better security".to_string());
        }
        if !variety.digit {
            suggestions.push("Add numbers for better security".to_string());
        }
        if !variety.symbol {
            suggestions.push("Add symbols for better security".to_string());
        }
        if let Some(run) = consecutive_run(candidate) {
            suggestions.push(run.to_string());
        }

        let warning = if score <= 1 {
            Some("This password is easy to guess".to_string())
        } else {
            None
        };

        Assessment {
            score,
            warning,
            suggestions,
        }
    }
}

/// Pick the estimator once at startup.
pub fn default_estimator(choice: ScorerChoice) -> Box<dyn StrengthEstimator> {
    match choice {
        ScorerChoice::Heuristic => Box::new(HeuristicEstimator),
        #[cfg(feature = "zxcvbn")]
        ScorerChoice::Auto | ScorerChoice::Zxcvbn => Box::new(ZxcvbnEstimator),
        #[cfg(not(feature = "zxcvbn"))]
        ScorerChoice::Auto => Box::new(HeuristicEstimator),
        #[cfg(not(feature = "zxcvbn"))]
        ScorerChoice::Zxcvbn => {
            warn!("⚠️ zxcvbn scorer requested but not compiled in, using heuristic");
            Box::new(HeuristicEstimator)
        }
    }
}

/// Entropy of a random string, from the character classes it contains.
pub fn string_entropy(candidate: &str) -> u32 {
    let variety = Variety::of(candidate);
    let mut charset_size = 0u32;
    if variety.lower {
        charset_size += 26;
    }
    if variety.upper {
        charset_size += 26;
    }
    if variety.digit {
        charset_size += 10;
    }
    if variety.symbol {
        charset_size += 33;
    }
    if charset_size == 0 {
        charset_size = 26;
    }

    let length = candidate.chars().count() as f64;
    (length * f64::from(charset_size).log2()).round() as u32
}

/// Entropy of a passphrase drawn from a list of `word_list_size` words.
///
/// Words are the alphabetic tokens of at least three letters. A trailing
/// suffix symbol adds log2(8) bits and a trailing number adds log2(10000).
pub fn passphrase_entropy(candidate: &str, word_list_size: usize) -> u32 {
    let words = candidate
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|token| token.len() >= 3)
        .count();
    let mut bits = words as f64 * (word_list_size.max(1) as f64).log2();

    let mut rest = candidate;
    if let Some(last) = rest.chars().last() {
        if SUFFIX_SYMBOLS.contains(last) {
            bits += (SUFFIX_SYMBOLS.chars().count() as f64).log2();
            rest = &rest[..rest.len() - last.len_utf8()];
        }
    }

    let rest = rest.trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
    if rest.ends_with(|c: char| c.is_ascii_digit()) {
        bits += f64::from(SUFFIX_NUMBER_RANGE).log2();
    }

    bits.round() as u32
}

/// Entropy of arbitrary user input, assuming at least a 26-letter alphabet.
pub fn analysis_entropy(candidate: &str) -> u32 {
    let length = candidate.chars().count() as f64;
    let distinct = candidate.chars().collect::<HashSet<_>>().len().max(26);
    (length * (distinct as f64).log2()).round() as u32
}

/// Score, label and entropy for `candidate`.
///
/// Warning and suggestions are only reported when analysing user input.
pub fn estimate_strength(
    estimator: &dyn StrengthEstimator,
    candidate: &str,
    mode: EstimationMode,
) -> StrengthResult {
    if candidate.is_empty() {
        return StrengthResult::empty();
    }

    let assessment = estimator.assess(candidate);
    let score = assessment.score.min(4);

    let entropy_bits = match mode {
        EstimationMode::String => string_entropy(candidate),
        EstimationMode::Passphrase { word_list_size } => passphrase_entropy(candidate, word_list_size),
        EstimationMode::Analyze => analysis_entropy(candidate),
    };

    let (warning, suggestions) = if mode == EstimationMode::Analyze {
        (assessment.warning, assessment.suggestions)
    } else {
        (None, Vec::new())
    };

    debug!("📊 {} scored {} ({} bits)", estimator.name(), score, entropy_bits);

    StrengthResult {
        score,
        entropy_bits,
        label: StrengthLabel::from_score(score),
        warning,
        suggestions,
    }
}
