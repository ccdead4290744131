// src/cli/menu.rs
use anyhow::Result;
use inquire::{Confirm, Password, Select, Text};

use crate::core::config::Config;
use crate::generators::{PasswordGenerator, WordSource};
use crate::models::{PassphraseOptions, StringOptions};
use super::handlers;

const GENERATE_PASSWORD: &str = "🔐  Generate password";
const GENERATE_PASSPHRASE: &str = "📚  Generate passphrase";
const ANALYZE_PASSWORD: &str = "🔍  Analyze a password";
const REFRESH_WORDS: &str = "🔄  Reload word list";
const EXIT: &str = "🚪  Exit";

pub async fn run_cli_menu(
    generator: &PasswordGenerator,
    words: &WordSource,
    config: &Config,
) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSFORGE                ║");
    println!("╚══════════════════════════════════════╝");

    loop {
        let choice = Select::new(
            "What would you like to do?",
            vec![GENERATE_PASSWORD, GENERATE_PASSPHRASE, ANALYZE_PASSWORD, REFRESH_WORDS, EXIT],
        )
        .prompt()?;

        match choice {
            GENERATE_PASSWORD => {
                let options = prompt_string_options(config)?;
                if let Err(e) = handlers::handle_generate(generator, &options, 1) {
                    // Empty pool: ask the user to fix the settings
                    eprintln!("❌ {}", e);
                }
            }
            GENERATE_PASSPHRASE => {
                let options = prompt_passphrase_options(config)?;
                if let Err(e) = handlers::handle_passphrase(generator, words, &options, 1).await {
                    eprintln!("❌ {}", e);
                }
            }
            ANALYZE_PASSWORD => {
                let password = Password::new("Password to analyze:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?;
                handlers::handle_analyze(generator, &password);
            }
            REFRESH_WORDS => {
                words.refresh().await;
                let list = words.ensure_word_list().await;
                println!("✅ Word list ready ({} words)", list.len());
            }
            _ => break,
        }

        println!();
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn prompt_number(message: &str, default: usize) -> Result<usize> {
    let value = Text::new(message)
        .with_default(&default.to_string())
        .prompt()
        .and_then(|s| {
            s.trim()
                .parse()
                .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
        })?;
    Ok(value)
}

fn prompt_string_options(config: &Config) -> Result<StringOptions> {
    let length = prompt_number("Password length:", config.default_password_length)?;

    let include_lowercase = Confirm::new("Include lowercase letters?")
        .with_default(true)
        .prompt()?;

    let include_uppercase = Confirm::new("Include uppercase letters?")
        .with_default(true)
        .prompt()?;

    let include_numbers = Confirm::new("Include numbers?")
        .with_default(true)
        .prompt()?;

    let include_symbols = Confirm::new("Include symbols?")
        .with_default(true)
        .prompt()?;

    let avoid_ambiguous = Confirm::new("Avoid look-alike characters (I, l, 1, O, 0)?")
        .with_default(false)
        .prompt()?;

    Ok(StringOptions {
        length,
        include_lowercase,
        include_uppercase,
        include_numbers,
        include_symbols,
        avoid_ambiguous,
    })
}

fn prompt_passphrase_options(config: &Config) -> Result<PassphraseOptions> {
    let word_count = prompt_number("Number of words:", config.default_word_count)?;

    let separator = Text::new("Separator:")
        .with_default(&config.default_separator)
        .prompt()?;

    let capitalize = Confirm::new("Capitalize words?")
        .with_default(true)
        .prompt()?;

    let append_number = Confirm::new("Append a number?")
        .with_default(false)
        .prompt()?;

    let append_symbol = Confirm::new("Append a symbol?")
        .with_default(false)
        .prompt()?;

    Ok(PassphraseOptions {
        word_count,
        separator,
        capitalize,
        append_number,
        append_symbol,
    })
}
