// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the HTTP API server
    Serve,

    /// Generate random-character passwords
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Leave out look-alike characters (I, l, 1, O, 0)
        #[arg(long)]
        avoid_ambiguous: bool,

        /// How many passwords to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Generate word-based passphrases
    Passphrase {
        /// Number of words
        #[arg(long, short)]
        words: Option<usize>,

        /// Text placed between words (may be empty)
        #[arg(long, short, allow_hyphen_values = true)]
        separator: Option<String>,

        /// Keep words lowercase
        #[arg(long)]
        no_capitalize: bool,

        /// Append a number between 0 and 9999
        #[arg(long)]
        number: bool,

        /// Append one of !@#$%^&*
        #[arg(long)]
        symbol: bool,

        /// How many passphrases to print
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze (prompted for when omitted)
        password: Option<String>,
    },
}
