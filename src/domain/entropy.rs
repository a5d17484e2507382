//! Validated entropy and seed buffers

use zeroize::Zeroizing;

use super::Strength;
use crate::error::Result;

/// Entropy bytes of a valid [`Strength`]
///
/// The buffer is wiped on drop. `Debug` prints only the strength.
#[derive(Clone, PartialEq, Eq)]
pub struct Entropy {
    bytes: Zeroizing<Vec<u8>>,
    strength: Strength,
}

impl Entropy {
    /// Copies `bytes` into a new entropy value
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidEntropyLength`] if the length is not
    /// 16, 20, 24, 28 or 32 bytes
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mnemonic39::domain::Entropy;
    ///
    /// let entropy = Entropy::new(&[0u8; 16]).unwrap();
    /// assert_eq!(*entropy.strength(), 128);
    ///
    /// assert!(Entropy::new(&[0u8; 17]).is_err());
    /// ```
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let strength = Strength::from_byte_len(bytes.len())?;
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
            strength,
        })
    }

    /// Takes ownership of an already-zeroizing buffer without copying
    ///
    /// # Errors
    /// Same as [`Entropy::new`]
    pub fn from_zeroizing(bytes: Zeroizing<Vec<u8>>) -> Result<Self> {
        let strength = Strength::from_byte_len(bytes.len())?;
        Ok(Self { bytes, strength })
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// Lowercase hex encoding of the entropy bytes
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.bytes))
    }
}

impl std::fmt::Debug for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entropy")
            .field("strength", &*self.strength)
            .finish_non_exhaustive()
    }
}

/// Length of a derived seed in bytes
pub const SEED_LEN: usize = 64;

/// 64-byte seed derived from a sentence and passphrase
#[derive(Clone, PartialEq, Eq)]
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    pub(crate) fn from_bytes(bytes: Zeroizing<[u8; SEED_LEN]>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Lowercase hex encoding of the seed
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.0))
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(<redacted>)")
    }
}
