use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use mnemonic39::cli::{Cli, Commands};
use mnemonic39::commands::{
    check_mnemonic, generate_mnemonic, mnemonic_from_entropy, mnemonic_to_seed, provider_for,
};
use mnemonic39::domain::GenerateConfig;

/// Strips the line terminator and nothing else; passphrase spaces are significant
fn strip_line_ending(line: &str) -> Zeroizing<String> {
    Zeroizing::new(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Read one secret line from stdin (hidden input when TTY available)
fn read_secret(prompt: &str) -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("{prompt}");
        let line = Zeroizing::new(rpassword::read_password().context("Failed to read from stdin")?);
        Ok(strip_line_ending(&line))
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut line = Zeroizing::new(String::new());
        handle
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        Ok(strip_line_ending(&line))
    }
}

fn read_mnemonic() -> Result<Zeroizing<String>> {
    let line = read_secret("Enter mnemonic (12 to 24 words):")?;
    let mnemonic = Zeroizing::new(line.trim().to_string());
    if mnemonic.is_empty() {
        anyhow::bail!("No mnemonic provided");
    }
    Ok(mnemonic)
}

fn read_passphrase() -> Result<Zeroizing<String>> {
    read_secret("Enter passphrase (empty for none):")
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let provider = provider_for(cli.wordlist_dir.as_deref());
    debug!(wordlist_dir = ?cli.wordlist_dir, "wordlist provider selected");

    match cli.command {
        Commands::Generate {
            bits,
            seed,
            language,
        } => {
            let config = GenerateConfig::new(bits, &language.language)?;
            let passphrase = if seed { Some(read_passphrase()?) } else { None };

            let generated =
                generate_mnemonic(&config, provider, passphrase.as_deref().map(String::as_str))?;
            println!("{}", generated.sentence.as_str());
            if let Some(seed_hex) = generated.seed_hex {
                println!("{}", seed_hex.as_str());
            }
        }
        Commands::Seed { language } => {
            let mnemonic = read_mnemonic()?;
            let passphrase = read_passphrase()?;
            let seed_hex = mnemonic_to_seed(&mnemonic, &passphrase, &language.language, provider)?;
            println!("{}", seed_hex.as_str());
        }
        Commands::Check { language } => {
            let mnemonic = read_mnemonic()?;
            let report = check_mnemonic(&mnemonic, &language.language, provider)?;
            println!("valid: {} words, {} bits", report.word_count, report.strength);
            println!("{}", report.entropy_hex);
        }
        Commands::FromEntropy { entropy, language } => {
            let entropy = Zeroizing::new(entropy);
            let sentence = mnemonic_from_entropy(&entropy, &language.language, provider)?;
            println!("{}", sentence.as_str());
        }
    }

    Ok(())
}
