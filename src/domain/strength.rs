//! `Strength` newtype for entropy bit-lengths

use crate::error::{Error, Result};

/// Entropy bit-length (128, 160, 192, 224 or 256)
///
/// Every derived size (byte length, checksum width, word count) is a pure
/// function of the strength, so holding a `Strength` means the extended
/// bit string always splits evenly into 11-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength(u16);

impl Strength {
    /// Minimum valid strength in bits
    pub const MIN: u16 = 128;

    /// Maximum valid strength in bits
    pub const MAX: u16 = 256;

    /// Step between valid strengths
    pub const STEP: u16 = 32;

    /// Weakest valid strength
    pub(crate) const LOWEST: Self = Self(Self::MIN);

    /// Wraps a bit count the caller has already validated
    pub(crate) const fn from_valid_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Creates a new strength from a bit count
    ///
    /// # Errors
    /// Returns [`Error::InvalidEntropyLength`] unless `bits` is one of
    /// 128, 160, 192, 224 or 256
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic39::domain::Strength;
    ///
    /// let strength = Strength::new(128).unwrap();
    /// assert_eq!(*strength, 128);
    /// assert_eq!(strength.word_count(), 12);
    /// assert_eq!(strength.checksum_bits(), 4);
    ///
    /// assert!(Strength::new(129).is_err());
    /// assert!(Strength::new(288).is_err());
    /// ```
    pub fn new(bits: u16) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&bits) || bits % Self::STEP != 0 {
            return Err(Error::InvalidEntropyLength {
                bits: usize::from(bits),
            });
        }
        Ok(Self(bits))
    }

    /// Creates a strength from an entropy byte length
    ///
    /// # Errors
    /// Returns [`Error::InvalidEntropyLength`] if `len * 8` is not a valid strength
    pub fn from_byte_len(len: usize) -> Result<Self> {
        let bits = len.saturating_mul(8);
        u16::try_from(bits)
            .map_err(|_| Error::InvalidEntropyLength { bits })
            .and_then(Self::new)
    }

    /// All valid strengths in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).step_by(usize::from(Self::STEP)).map(Self)
    }

    /// Entropy length in bytes (16..=32)
    #[must_use]
    pub fn byte_len(self) -> usize {
        usize::from(self.0) / 8
    }

    /// Checksum length in bits (4..=8)
    #[must_use]
    pub fn checksum_bits(self) -> usize {
        usize::from(self.0) / 32
    }

    /// Total bits of entropy followed by checksum
    #[must_use]
    pub fn extended_bits(self) -> usize {
        usize::from(self.0) + self.checksum_bits()
    }

    /// Number of words in a sentence of this strength (12..=24)
    #[must_use]
    pub fn word_count(self) -> usize {
        self.extended_bits() / 11
    }
}

impl std::ops::Deref for Strength {
    type Target = u16;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
