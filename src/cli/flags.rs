use clap::{ArgAction, Parser};

/// Generate passwords from letters, digits and symbols.
///
/// Run without arguments for the interactive menu.
#[derive(Debug, Parser)]
#[command(name = "pwgen", version)]
pub struct CliFlags {
    /// Characters per password [default: 15]. Read like a text field:
    /// "12abc" is 12, while "abc" or a negative number generates nothing.
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Draw from A-Z and a-z only
    #[arg(long)]
    pub letters_only: bool,

    /// Flip symbols & numbers on/off. Repeat to flip again.
    #[arg(short, long, action = ArgAction::Count)]
    pub toggle: u8,

    /// How many passwords to print
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub number: usize,

    /// Sample from the OS generator instead of the fast default
    #[arg(short, long)]
    pub urandom: bool,

    /// Suppress everything except passwords and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print pool size, entropy and random source to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}
