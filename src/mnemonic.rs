//! Immutable mnemonic value with memoized sentence and seed
//!
//! A [`Mnemonic`] is built from random entropy, from caller-supplied
//! entropy, or from an existing sentence. All three paths converge on the
//! same representation (entropy, passphrase, language); the sentence and
//! seed are derived on first request and cached.
//!
//! ```rust
//! use mnemonic39::Mnemonic;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mnemonic = Mnemonic::from_entropy(&[0u8; 16], "TREZOR")?;
//! assert!(mnemonic.sentence()?.ends_with(" about"));
//!
//! let restored = Mnemonic::from_sentence(mnemonic.sentence()?, "TREZOR", "english")?;
//! assert_eq!(restored.seed_bytes()?, mnemonic.seed_bytes()?);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;
use zeroize::Zeroizing;

use crate::codec;
use crate::domain::{Entropy, SEED_LEN, Seed, Strength, WordCount};
use crate::entropy::{self, EntropySource, OsEntropy};
use crate::error::Result;
use crate::seed::derive_seed;
use crate::wordlist::{DEFAULT_LANGUAGE, WordlistProvider, default_provider, normalize_language};

/// A BIP39 mnemonic: entropy plus the passphrase used for seed derivation
///
/// The passphrase never affects the sentence, only the seed.
#[derive(Clone)]
pub struct Mnemonic {
    entropy: Entropy,
    passphrase: Zeroizing<String>,
    language: String,
    provider: Arc<dyn WordlistProvider>,
    sentence: OnceCell<Zeroizing<String>>,
    seed: OnceCell<Seed>,
}

impl Mnemonic {
    fn assemble(entropy: Entropy, passphrase: &str) -> Self {
        Self {
            entropy,
            passphrase: Zeroizing::new(passphrase.to_string()),
            language: DEFAULT_LANGUAGE.to_string(),
            provider: default_provider(),
            sentence: OnceCell::new(),
            seed: OnceCell::new(),
        }
    }

    /// Generates a mnemonic from operating system randomness
    ///
    /// # Errors
    /// - [`crate::Error::InvalidEntropyLength`] if `bits` is not 128, 160,
    ///   192, 224 or 256
    /// - [`crate::Error::EntropySourceFailure`] if no randomness is available
    pub fn random(bits: u16, passphrase: &str) -> Result<Self> {
        Self::random_with(&OsEntropy, bits, passphrase)
    }

    /// Generates a mnemonic from the given entropy source
    ///
    /// # Errors
    /// Same as [`Mnemonic::random`]
    pub fn random_with(source: &dyn EntropySource, bits: u16, passphrase: &str) -> Result<Self> {
        let strength = Strength::new(bits)?;
        let entropy = entropy::generate(source, strength)?;
        debug!(bits = *strength, "generated mnemonic from random entropy");
        Ok(Self::assemble(entropy, passphrase))
    }

    /// Wraps caller-supplied entropy
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidEntropyLength`] if `entropy` is not 16,
    /// 20, 24, 28 or 32 bytes
    pub fn from_entropy(entropy: &[u8], passphrase: &str) -> Result<Self> {
        let entropy = Entropy::new(entropy)?;
        debug!(bits = *entropy.strength(), "created mnemonic from explicit entropy");
        Ok(Self::assemble(entropy, passphrase))
    }

    /// Parses and validates an existing sentence using the process-wide wordlists
    ///
    /// # Errors
    /// Returns any decode or wordlist error; see [`codec::decode`]
    pub fn from_sentence(sentence: &str, passphrase: &str, language: &str) -> Result<Self> {
        Self::from_sentence_with(default_provider(), sentence, passphrase, language)
    }

    /// Parses and validates an existing sentence using `provider`
    ///
    /// # Errors
    /// Returns any decode or wordlist error; see [`codec::decode`]
    pub fn from_sentence_with(
        provider: Arc<dyn WordlistProvider>,
        sentence: &str,
        passphrase: &str,
        language: &str,
    ) -> Result<Self> {
        let language = normalize_language(language);
        let wordlist = provider.wordlist(&language)?;
        let entropy = codec::decode(sentence, &wordlist)?;
        debug!(bits = *entropy.strength(), %language, "restored mnemonic from sentence");
        Ok(Self {
            language,
            provider,
            ..Self::assemble(entropy, passphrase)
        })
    }

    /// Returns a copy rendering its sentence in `language`
    ///
    /// Entropy and passphrase are kept; cached sentence and seed are dropped.
    #[must_use]
    pub fn with_language(&self, language: &str) -> Self {
        Self {
            language: normalize_language(language),
            provider: Arc::clone(&self.provider),
            ..Self::assemble(self.entropy.clone(), &self.passphrase)
        }
    }

    /// Returns a copy resolving wordlists through `provider`
    #[must_use]
    pub fn with_provider(&self, provider: Arc<dyn WordlistProvider>) -> Self {
        Self {
            language: self.language.clone(),
            provider,
            ..Self::assemble(self.entropy.clone(), &self.passphrase)
        }
    }

    /// The mnemonic sentence, words joined by single spaces
    ///
    /// # Errors
    /// Returns a wordlist error if the language cannot be loaded
    pub fn sentence(&self) -> Result<&str> {
        self.sentence
            .get_or_try_init(|| {
                let wordlist = self.provider.wordlist(&self.language)?;
                codec::encode(&self.entropy, &wordlist)
            })
            .map(|sentence| sentence.as_str())
    }

    /// The derived seed
    ///
    /// # Errors
    /// Same as [`Mnemonic::sentence`]
    pub fn seed(&self) -> Result<&Seed> {
        self.seed.get_or_try_init(|| {
            let sentence = self.sentence()?;
            Ok(derive_seed(sentence, &self.passphrase))
        })
    }

    /// The derived seed as raw bytes
    ///
    /// # Errors
    /// Same as [`Mnemonic::sentence`]
    pub fn seed_bytes(&self) -> Result<&[u8; SEED_LEN]> {
        self.seed().map(Seed::as_bytes)
    }

    /// The derived seed as lowercase hex
    ///
    /// # Errors
    /// Same as [`Mnemonic::sentence`]
    pub fn seed_hex(&self) -> Result<Zeroizing<String>> {
        self.seed().map(Seed::to_hex)
    }

    #[must_use]
    pub fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    #[must_use]
    pub fn word_count(&self) -> WordCount {
        WordCount::from(self.entropy.strength())
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl std::fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mnemonic")
            .field("strength", &*self.entropy.strength())
            .field("language", &self.language)
            .field("has_passphrase", &!self.passphrase.is_empty())
            .finish_non_exhaustive()
    }
}
