use clap::Parser;
use std::path::Path;
use std::sync::Arc;

mod api;
mod cli;
mod core;
mod crypto;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::generators::{default_estimator, PasswordGenerator, WordListCache, WordSource};
use crate::models::{PassphraseOptions, StringOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(port) = args.api_port {
        config.web_port = port;
    }
    if let Some(address) = &args.address {
        config.web_address = address.clone();
    }
    if let Some(url) = &args.wordlist_url {
        config.wordlist_url = Some(url.clone());
    }
    if let Some(path) = &args.wordlist_path {
        config.wordlist_path = Some(path.clone());
    }

    logging::init(&config)?;
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::new(default_estimator(config.strength_scorer));
    log::info!("📊 Strength scorer: {}", generator.estimator_name());

    let words = WordSource::new(config.word_origin(), Arc::new(WordListCache::new()));

    match args.command {
        Some(CliCommand::Serve) => {
            log::info!("🔒 Starting PassForge in API mode");
            let state = api::AppState::new(generator);
            api::start_server(state, &config.web_address, config.web_port).await?;
        }
        Some(CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_numbers,
            no_symbols,
            avoid_ambiguous,
            count,
        }) => {
            let options = StringOptions {
                length: length.unwrap_or(config.default_password_length),
                include_lowercase: !no_lowercase,
                include_uppercase: !no_uppercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
                avoid_ambiguous,
            };
            cli::handlers::handle_generate(&generator, &options, count)?;
        }
        Some(CliCommand::Passphrase {
            words: word_count,
            separator,
            no_capitalize,
            number,
            symbol,
            count,
        }) => {
            let options = PassphraseOptions {
                word_count: word_count.unwrap_or(config.default_word_count),
                separator: separator.unwrap_or_else(|| config.default_separator.clone()),
                capitalize: !no_capitalize,
                append_number: number,
                append_symbol: symbol,
            };
            cli::handlers::handle_passphrase(&generator, &words, &options, count).await?;
        }
        Some(CliCommand::Analyze { password }) => {
            let password = match password {
                Some(password) => password,
                None => inquire::Password::new("Password to analyze:")
                    .with_display_mode(inquire::PasswordDisplayMode::Masked)
                    .without_confirmation()
                    .prompt()?,
            };
            cli::handlers::handle_analyze(&generator, &password);
        }
        None => {
            // Warm the word list cache in the background; the menu never waits on it
            let prefetch = words.clone();
            tokio::spawn(async move {
                prefetch.ensure_word_list().await;
            });
            cli::menu::run_cli_menu(&generator, &words, &config).await?;
        }
    }

    Ok(())
}
