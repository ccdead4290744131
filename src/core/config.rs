// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use log::LevelFilter;

use crate::generators::WordOrigin;

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Word list
    pub wordlist_url: Option<String>,
    pub wordlist_path: Option<PathBuf>,
    pub wordlist_timeout: Duration,

    // Password Generation
    pub default_password_length: usize,
    pub default_word_count: usize,
    pub default_separator: String,

    // Strength scoring
    pub strength_scorer: ScorerChoice,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

/// Which strength estimator to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerChoice {
    /// Use zxcvbn when it is compiled in, otherwise the heuristic.
    Auto,
    Zxcvbn,
    Heuristic,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 3000,

            // Word list
            wordlist_url: None,
            wordlist_path: None,
            wordlist_timeout: Duration::from_secs(5),

            // Password Generation
            default_password_length: 12,
            default_word_count: 4,
            default_separator: "-".to_string(),

            // Strength scoring
            strength_scorer: ScorerChoice::Auto,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Word list
        if let Ok(url) = env::var("WORDLIST_URL") {
            if !url.trim().is_empty() {
                config.wordlist_url = Some(url);
            }
        }

        if let Ok(path) = env::var("WORDLIST_PATH") {
            if !path.trim().is_empty() {
                config.wordlist_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(val) = env::var("WORDLIST_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.wordlist_timeout = Duration::from_secs(secs);
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        if let Ok(val) = env::var("DEFAULT_WORD_COUNT") {
            if let Ok(count) = val.parse() {
                config.default_word_count = count;
            }
        }

        if let Ok(separator) = env::var("DEFAULT_SEPARATOR") {
            config.default_separator = separator;
        }

        // Strength scoring
        if let Ok(scorer) = env::var("STRENGTH_SCORER") {
            config.strength_scorer = parse_scorer(&scorer);
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            if let Some(filter) = parse_level(&level) {
                config.log_level = filter;
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }

    /// Word corpus origin; a URL takes precedence over a local file.
    pub fn word_origin(&self) -> WordOrigin {
        if let Some(url) = &self.wordlist_url {
            WordOrigin::Url {
                url: url.clone(),
                timeout: self.wordlist_timeout,
            }
        } else if let Some(path) = &self.wordlist_path {
            WordOrigin::File(path.clone())
        } else {
            WordOrigin::Builtin
        }
    }
}

fn parse_scorer(value: &str) -> ScorerChoice {
    match value.to_lowercase().as_str() {
        "zxcvbn" => ScorerChoice::Zxcvbn,
        "heuristic" | "fallback" => ScorerChoice::Heuristic,
        "auto" => ScorerChoice::Auto,
        _ => {
            log::warn!("Unknown strength scorer '{}', using auto", value);
            ScorerChoice::Auto
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
