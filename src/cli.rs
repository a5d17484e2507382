use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::Strength;
use crate::wordlist::DEFAULT_LANGUAGE;

/// Validates that the strength is one of the five BIP39 entropy sizes
fn validate_bits(s: &str) -> Result<u16, String> {
    let value: u16 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    Strength::new(value)
        .map(|strength| *strength)
        .map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "mnemonic39")]
#[command(about = "Generate, check and stretch BIP39 mnemonic codes")]
pub struct Cli {
    /// Directory of `<language>.txt` wordlists to use instead of the bundled lists
    #[arg(long, global = true, env = "MNEMONIC39_WORDLIST_DIR")]
    pub wordlist_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct LanguageArg {
    /// Wordlist language
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new random mnemonic
    Generate {
        /// Entropy strength in bits: 128, 160, 192, 224 or 256
        #[arg(short, long, default_value_t = 128, value_parser = validate_bits)]
        bits: u16,

        /// Also derive the seed (reads a passphrase from stdin)
        #[arg(long)]
        seed: bool,

        #[command(flatten)]
        language: LanguageArg,
    },
    /// Derive the seed of a mnemonic (reads mnemonic and passphrase from stdin)
    Seed {
        #[command(flatten)]
        language: LanguageArg,
    },
    /// Validate a mnemonic and print its entropy
    Check {
        #[command(flatten)]
        language: LanguageArg,
    },
    /// Render hex entropy as a mnemonic
    FromEntropy {
        /// Entropy as hex (32, 40, 48, 56 or 64 digits)
        entropy: String,

        #[command(flatten)]
        language: LanguageArg,
    },
}
