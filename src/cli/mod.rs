// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port
    #[arg(long, env = "WEB_PORT")]
    pub api_port: Option<u16>,

    /// API server bind address
    #[arg(long, env = "WEB_ADDRESS")]
    pub address: Option<String>,

    /// Word list URL for passphrases
    #[arg(long, env = "WORDLIST_URL")]
    pub wordlist_url: Option<String>,

    /// Word list file for passphrases
    #[arg(long, env = "WORDLIST_PATH")]
    pub wordlist_path: Option<std::path::PathBuf>,
}
