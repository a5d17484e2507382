//! `WordCount` newtype for mnemonic sentence lengths

use super::Strength;
use crate::error::{Error, Result};

/// Number of words in a mnemonic sentence (12, 15, 18, 21 or 24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordCount(u8);

impl WordCount {
    /// Creates a new word count
    ///
    /// # Errors
    /// Returns [`Error::InvalidWordCount`] unless `count` is 12, 15, 18, 21 or 24
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic39::domain::WordCount;
    ///
    /// let count = WordCount::new(24).unwrap();
    /// assert_eq!(*count.strength(), 256);
    ///
    /// assert!(WordCount::new(11).is_err());
    /// assert!(WordCount::new(13).is_err());
    /// ```
    pub fn new(count: usize) -> Result<Self> {
        if !(12..=24).contains(&count) || count % 3 != 0 {
            return Err(Error::InvalidWordCount { count });
        }
        u8::try_from(count)
            .map(Self)
            .map_err(|_| Error::InvalidWordCount { count })
    }

    /// Entropy strength encoded by a sentence of this length
    ///
    /// Each group of three words carries 32 bits of entropy plus one
    /// checksum bit, so entropy bits are `words * 32 / 3`.
    #[must_use]
    pub fn strength(self) -> Strength {
        Strength::from_valid_bits(u16::from(self.0) * 32 / 3)
    }
}

impl From<Strength> for WordCount {
    fn from(strength: Strength) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "word counts are at most 24"
        )]
        Self(strength.word_count() as u8)
    }
}

impl std::ops::Deref for WordCount {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
