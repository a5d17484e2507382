//! Entropy checksum: the leading `ENT / 32` bits of SHA-256(entropy)

use sha2::{Digest, Sha256};

use crate::domain::Entropy;

/// Checksum bits left-aligned in a byte, together with their width
///
/// The width is 4..=8 bits; unused low bits are always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    bits: u8,
    len: usize,
}

impl Checksum {
    /// Left-aligned checksum bits
    #[must_use]
    pub fn bits(self) -> u8 {
        self.bits
    }

    /// Number of meaningful bits
    #[must_use]
    pub fn len(self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Checksum bits right-aligned as an integer, e.g. `0b0011` for a 4-bit checksum
    #[must_use]
    pub fn value(self) -> u8 {
        self.bits >> (8 - self.len)
    }
}

/// Computes the checksum for `entropy`
///
/// # Examples
///
/// ```rust
/// use mnemonic39::checksum::checksum;
/// use mnemonic39::domain::Entropy;
///
/// // SHA-256 of sixteen zero bytes starts with 0x37
/// let cs = checksum(&Entropy::new(&[0u8; 16]).unwrap());
/// assert_eq!(cs.len(), 4);
/// assert_eq!(cs.value(), 0x3);
/// ```
#[must_use]
pub fn checksum(entropy: &Entropy) -> Checksum {
    let digest = Sha256::digest(entropy.as_bytes());
    let len = entropy.strength().checksum_bits();
    let mask = 0xFFu8 << (8 - len);
    Checksum {
        bits: digest[0] & mask,
        len,
    }
}

/// Returns true if `value` (right-aligned) matches the checksum of `entropy`
#[must_use]
pub fn verify(entropy: &Entropy, value: u8) -> bool {
    checksum(entropy).value() == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_follows_strength() {
        for len in [16, 20, 24, 28, 32] {
            let entropy = Entropy::new(&vec![0x5A; len]).unwrap();
            assert_eq!(checksum(&entropy).len(), len * 8 / 32);
        }
    }

    #[test]
    fn test_full_byte_checksum_for_256_bits() {
        // SHA-256 of 32 zero bytes is 66687aad...
        let entropy = Entropy::new(&[0u8; 32]).unwrap();
        let cs = checksum(&entropy);
        assert_eq!(cs.len(), 8);
        assert_eq!(cs.bits(), 0x66);
        assert_eq!(cs.value(), 0x66);
    }

    #[test]
    fn test_unused_bits_are_cleared() {
        for len in [16, 20, 24, 28] {
            let entropy = Entropy::new(&vec![0xFF; len]).unwrap();
            let cs = checksum(&entropy);
            assert_eq!(cs.bits() & (0xFF >> cs.len()), 0);
        }
    }

    #[test]
    fn test_verify() {
        let entropy = Entropy::new(&[0u8; 16]).unwrap();
        assert!(verify(&entropy, 0x3));
        assert!(!verify(&entropy, 0x4));
    }
}
