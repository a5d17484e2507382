//! Packing of byte buffers into 11-bit word indices and back
//!
//! Bits are read MSB-first within each byte and bytes are concatenated in
//! order. Each 11-bit group is a big-endian index into a 2048-word list.

use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// Width of one word index in bits
pub const WORD_BITS: usize = 11;

/// Exclusive upper bound of a word index (2^11)
pub const WORDLIST_LEN: usize = 1 << WORD_BITS;

/// Packs the first `bit_len` bits of `data` into 11-bit indices
///
/// # Errors
/// Returns [`Error::InternalInvariant`] if `bit_len` is not a multiple of 11
/// or exceeds the bits available in `data`
///
/// # Examples
///
/// ```rust
/// use mnemonic39::bits::pack;
///
/// // 0xFF 0xE0 -> 1111_1111_111 | 0_0000
/// assert_eq!(*pack(&[0xFF, 0xE0], 11).unwrap(), vec![0x7FF]);
/// ```
pub fn pack(data: &[u8], bit_len: usize) -> Result<Zeroizing<Vec<u16>>> {
    if bit_len % WORD_BITS != 0 {
        return Err(Error::InternalInvariant(
            "bit length is not a multiple of the word width",
        ));
    }
    if bit_len > data.len() * 8 {
        return Err(Error::InternalInvariant(
            "bit length exceeds the packed buffer",
        ));
    }

    let mut indices = Zeroizing::new(Vec::with_capacity(bit_len / WORD_BITS));
    let mut acc: u32 = 0;
    let mut acc_bits = 0;
    let mut remaining = bit_len;

    for &byte in data {
        if remaining == 0 {
            break;
        }
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;

        while acc_bits >= WORD_BITS && remaining >= WORD_BITS {
            acc_bits -= WORD_BITS;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "masked to 11 bits"
            )]
            let index = ((acc >> acc_bits) & 0x7FF) as u16;
            indices.push(index);
            remaining -= WORD_BITS;
        }
        // Only the unconsumed low bits are kept.
        acc &= (1 << acc_bits) - 1;
    }
    acc.zeroize();

    Ok(indices)
}

/// Concatenates 11-bit `indices` into bytes
///
/// The result holds `ceil(indices.len() * 11 / 8)` bytes; the trailing bits of
/// the last byte are zero.
///
/// # Errors
/// Returns [`Error::InternalInvariant`] if any index is 2048 or larger
pub fn unpack(indices: &[u16]) -> Result<Zeroizing<Vec<u8>>> {
    let bit_len = indices.len() * WORD_BITS;
    let mut out = Zeroizing::new(Vec::with_capacity(bit_len.div_ceil(8)));
    let mut acc: u32 = 0;
    let mut acc_bits = 0;

    for &index in indices {
        if usize::from(index) >= WORDLIST_LEN {
            return Err(Error::InternalInvariant("word index out of range"));
        }
        acc = (acc << WORD_BITS) | u32::from(index);
        acc_bits += WORD_BITS;

        while acc_bits >= 8 {
            acc_bits -= 8;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "masked to 8 bits"
            )]
            let byte = ((acc >> acc_bits) & 0xFF) as u8;
            out.push(byte);
        }
        acc &= (1 << acc_bits) - 1;
    }

    if acc_bits > 0 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "fewer than 8 bits remain"
        )]
        let byte = (acc << (8 - acc_bits)) as u8;
        out.push(byte);
    }
    acc.zeroize();

    Ok(out)
}
