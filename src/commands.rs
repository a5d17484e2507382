use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::Mnemonic;
use crate::domain::GenerateConfig;
use crate::wordlist::{DirectorySource, WordlistCache, WordlistProvider, default_provider};

/// A freshly generated mnemonic, with its seed when one was requested
pub struct Generated {
    pub sentence: Zeroizing<String>,
    pub seed_hex: Option<Zeroizing<String>>,
}

/// Summary of a validated mnemonic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// Number of words in the sentence
    pub word_count: u8,
    /// Entropy strength in bits
    pub strength: u16,
    /// Entropy as lowercase hex
    pub entropy_hex: String,
}

/// Selects the wordlist provider: files under `wordlist_dir`, or the bundled lists
#[must_use]
pub fn provider_for(wordlist_dir: Option<&Path>) -> Arc<dyn WordlistProvider> {
    match wordlist_dir {
        Some(dir) => Arc::new(WordlistCache::new(DirectorySource::new(dir))),
        None => default_provider(),
    }
}

/// Generate a new random mnemonic
///
/// When `passphrase` is given the seed is derived as well.
///
/// # Errors
/// Returns an error if randomness is unavailable or the wordlist cannot be loaded
pub fn generate_mnemonic(
    config: &GenerateConfig,
    provider: Arc<dyn WordlistProvider>,
    passphrase: Option<&str>,
) -> Result<Generated> {
    let mnemonic = Mnemonic::random(*config.strength(), passphrase.unwrap_or_default())
        .context("Failed to generate entropy")?
        .with_language(config.language())
        .with_provider(provider);

    let sentence = Zeroizing::new(
        mnemonic
            .sentence()
            .with_context(|| format!("Failed to render mnemonic in '{}'", config.language()))?
            .to_string(),
    );
    let seed_hex = match passphrase {
        Some(_) => Some(mnemonic.seed_hex().context("Failed to derive seed")?),
        None => None,
    };

    Ok(Generated { sentence, seed_hex })
}

/// Render caller-supplied hex entropy as a mnemonic
///
/// # Errors
/// Returns an error if the hex is malformed or has an invalid length
pub fn mnemonic_from_entropy(
    entropy_hex: &str,
    language: &str,
    provider: Arc<dyn WordlistProvider>,
) -> Result<Zeroizing<String>> {
    let entropy = Zeroizing::new(
        hex::decode(entropy_hex.trim()).context("Entropy must be a hex string")?,
    );
    let mnemonic = Mnemonic::from_entropy(&entropy, "")
        .context("Invalid entropy")?
        .with_language(language)
        .with_provider(provider);

    let sentence = mnemonic
        .sentence()
        .with_context(|| format!("Failed to render mnemonic in '{language}'"))?;
    Ok(Zeroizing::new(sentence.to_string()))
}

/// Validate a mnemonic and derive its seed
///
/// # Errors
/// Returns an error if the mnemonic does not decode under `language`
pub fn mnemonic_to_seed(
    sentence: &str,
    passphrase: &str,
    language: &str,
    provider: Arc<dyn WordlistProvider>,
) -> Result<Zeroizing<String>> {
    let mnemonic = Mnemonic::from_sentence_with(provider, sentence, passphrase, language)
        .context("Failed to parse input mnemonic")?;
    mnemonic.seed_hex().context("Failed to derive seed")
}

/// Validate a mnemonic and report what it encodes
///
/// # Errors
/// Returns an error if the mnemonic does not decode under `language`
pub fn check_mnemonic(
    sentence: &str,
    language: &str,
    provider: Arc<dyn WordlistProvider>,
) -> Result<CheckReport> {
    let mnemonic = Mnemonic::from_sentence_with(provider, sentence, "", language)
        .context("Failed to parse input mnemonic")?;
    let entropy = mnemonic.entropy();

    Ok(CheckReport {
        word_count: *mnemonic.word_count(),
        strength: *entropy.strength(),
        entropy_hex: entropy.to_hex().to_string(),
    })
}
