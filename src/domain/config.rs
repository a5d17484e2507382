//! Configuration for mnemonic generation

use crate::error::{Error, Result};
use crate::wordlist::DEFAULT_LANGUAGE;

use super::Strength;

/// Validated pair of entropy strength and wordlist language
///
/// The language tag is normalized to lowercase and must be non-empty.
/// Whether a source can actually serve the language is checked on first
/// use, since a directory-backed provider may know tags the builtin one
/// does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    strength: Strength,
    language: String,
}

impl GenerateConfig {
    /// Creates a new generation config
    ///
    /// # Errors
    /// Returns an error if `bits` is not a valid strength or `language` is blank
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic39::domain::GenerateConfig;
    ///
    /// let config = GenerateConfig::new(256, "English").unwrap();
    /// assert_eq!(*config.strength(), 256);
    /// assert_eq!(config.language(), "english");
    ///
    /// assert!(GenerateConfig::new(100, "english").is_err());
    /// assert!(GenerateConfig::new(128, "  ").is_err());
    /// ```
    pub fn new(bits: u16, language: &str) -> Result<Self> {
        let strength = Strength::new(bits)?;
        let language = language.trim().to_lowercase();
        if language.is_empty() {
            return Err(Error::UnsupportedLanguage(language));
        }
        Ok(Self { strength, language })
    }

    /// Gets the strength value
    #[must_use]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Gets the language tag
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            strength: Strength::LOWEST,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
