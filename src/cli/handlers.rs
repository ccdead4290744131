// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use crate::generators::{PasswordGenerator, WordSource};
use crate::models::{EstimationMode, PassphraseOptions, StringOptions, StrengthLabel, StrengthResult};

// Handlers for CLI commands
pub fn handle_generate(
    generator: &PasswordGenerator,
    options: &StringOptions,
    count: usize,
) -> Result<Vec<String>> {
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let password = generator.generate_password(options)?;
        let strength = generator.analyze_password_strength(&password, EstimationMode::String);
        println!("{}  {}", style(&password).green().bold(), describe(&strength));
        passwords.push(password);
    }
    Ok(passwords)
}

pub async fn handle_passphrase(
    generator: &PasswordGenerator,
    words: &WordSource,
    options: &PassphraseOptions,
    count: usize,
) -> Result<Vec<String>> {
    let list = words.ensure_word_list().await;
    let mode = EstimationMode::Passphrase { word_list_size: list.len() };

    let mut passphrases = Vec::with_capacity(count);
    for _ in 0..count {
        let passphrase = generator.generate_passphrase(&list, options)?;
        let strength = generator.analyze_password_strength(&passphrase, mode);
        println!("{}  {}", style(&passphrase).green().bold(), describe(&strength));
        passphrases.push(passphrase);
    }
    Ok(passphrases)
}

pub fn handle_analyze(generator: &PasswordGenerator, password: &str) -> StrengthResult {
    let result = generator.analyze_password_strength(password, EstimationMode::Analyze);

    println!("Strength: {}", describe(&result));
    if let Some(warning) = &result.warning {
        println!("{} {}", style("Warning:").yellow().bold(), warning);
    }
    for suggestion in &result.suggestions {
        println!("  • {}", suggestion);
    }
    if result.warning.is_none() && result.suggestions.is_empty() && !password.is_empty() {
        println!("No specific feedback.");
    }

    result
}

/// Label and entropy, colored by strength.
pub fn describe(result: &StrengthResult) -> String {
    let text = if result.label == StrengthLabel::None {
        result.label.to_string()
    } else {
        format!("{} ({} bits)", result.label, result.entropy_bits)
    };

    let styled = match result.label {
        StrengthLabel::None => style(text).dim(),
        StrengthLabel::Weak => style(text).red(),
        StrengthLabel::Fair => style(text).yellow(),
        StrengthLabel::Strong => style(text).cyan(),
        StrengthLabel::VeryStrong => style(text).green(),
    };
    styled.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::strength::HeuristicEstimator;
    use crate::generators::{WordListCache, WordOrigin};
    use std::sync::Arc;

    fn generator() -> PasswordGenerator {
        PasswordGenerator::new(Box::new(HeuristicEstimator))
    }

    #[test]
    fn generate_prints_requested_count() {
        let options = StringOptions {
            length: 20,
            ..StringOptions::default()
        };
        let passwords = handle_generate(&generator(), &options, 3).unwrap();
        assert_eq!(passwords.len(), 3);
        assert!(passwords.iter().all(|p| p.chars().count() == 20));
    }

    #[test]
    fn generate_surfaces_empty_pool() {
        let options = StringOptions {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            ..StringOptions::default()
        };
        assert!(handle_generate(&generator(), &options, 1).is_err());
    }

    #[tokio::test]
    async fn passphrase_uses_word_source() {
        let source = WordSource::new(WordOrigin::Builtin, Arc::new(WordListCache::new()));
        let options = PassphraseOptions::default();

        let phrases = handle_passphrase(&generator(), &source, &options, 2).await.unwrap();

        assert_eq!(phrases.len(), 2);
        assert!(phrases.iter().all(|p| p.split('-').count() == 4));
    }

    #[test]
    fn describe_empty_has_no_bits() {
        console::set_colors_enabled(false);
        assert_eq!(describe(&StrengthResult::empty()), "None");
    }

    #[test]
    fn analyze_reports_feedback() {
        let result = handle_analyze(&generator(), "abc");
        assert_eq!(result.label, StrengthLabel::Weak);
        assert!(!result.suggestions.is_empty());
    }
}
