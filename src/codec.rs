//! BIP39 mnemonic encoding and decoding
//!
//! This module implements the [BIP39] conversion between
//! entropy and a mnemonic sentence.
//!
//! # Overview
//!
//! Encoding appends a checksum (the first `ENT / 32` bits of SHA-256 over the
//! entropy) to the entropy bits, splits the result into 11-bit groups and maps
//! each group to a word. Decoding reverses the mapping and recomputes the
//! checksum; a sentence is only accepted if the trailing checksum bits match.
//!
//! | entropy bits | checksum bits | words |
//! |--------------|---------------|-------|
//! | 128          | 4             | 12    |
//! | 160          | 5             | 15    |
//! | 192          | 6             | 18    |
//! | 224          | 7             | 21    |
//! | 256          | 8             | 24    |
//!
//! # Examples
//!
//! ```rust
//! use mnemonic39::codec::{decode, encode};
//! use mnemonic39::domain::Entropy;
//! use mnemonic39::wordlist::default_provider;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let wordlist = default_provider().wordlist("english")?;
//! let entropy = Entropy::new(&[0u8; 16])?;
//!
//! let sentence = encode(&entropy, &wordlist)?;
//! assert!(sentence.ends_with("abandon about"));
//!
//! let decoded = decode(&sentence, &wordlist)?;
//! assert_eq!(decoded, entropy);
//! # Ok(())
//! # }
//! ```
//!
//! [BIP39]: https://github.com/bitcoin/bips/blob/master/bip-0039.mediawiki

use zeroize::Zeroizing;

use crate::bits;
use crate::checksum::{self, checksum};
use crate::domain::{Entropy, WordCount};
use crate::error::{Error, Result};
use crate::wordlist::Wordlist;

/// Separator placed between words of an encoded sentence
pub const WORD_SEPARATOR: char = ' ';

/// Encodes `entropy` as a mnemonic sentence
///
/// Words are joined by a single ASCII space with no leading or trailing
/// whitespace. The result is a pure function of the entropy and wordlist.
///
/// # Errors
/// Returns [`Error::InternalInvariant`] only if the bit layout is broken,
/// which no valid [`Entropy`] can trigger
pub fn encode(entropy: &Entropy, wordlist: &Wordlist) -> Result<Zeroizing<String>> {
    let strength = entropy.strength();
    let checksum = checksum(entropy);

    // entropy || checksum, with the checksum left-aligned in one extra byte
    let mut extended = Zeroizing::new(Vec::with_capacity(strength.byte_len() + 1));
    extended.extend_from_slice(entropy.as_bytes());
    extended.push(checksum.bits());

    let indices = bits::pack(&extended, strength.extended_bits())?;

    let mut sentence = Zeroizing::new(String::with_capacity(indices.len() * 9));
    for (position, &index) in indices.iter().enumerate() {
        if position > 0 {
            sentence.push(WORD_SEPARATOR);
        }
        sentence.push_str(wordlist.word_at(index)?);
    }

    Ok(sentence)
}

/// Decodes a mnemonic sentence back to its entropy
///
/// Words may be separated by any whitespace; ASCII case is ignored.
///
/// # Errors
/// - [`Error::InvalidWordCount`] if the sentence does not have 12, 15, 18,
///   21 or 24 words
/// - [`Error::UnknownWord`] for the first word missing from `wordlist`
/// - [`Error::ChecksumMismatch`] if the trailing checksum bits disagree with
///   the recomputed checksum
pub fn decode(sentence: &str, wordlist: &Wordlist) -> Result<Entropy> {
    let strength = WordCount::new(word_count(sentence))?.strength();
    let indices = indices_of(sentence, wordlist)?;

    let mut extended = bits::unpack(&indices)?;
    if extended.len() != strength.byte_len() + 1 {
        return Err(Error::InternalInvariant(
            "unpacked length does not match word count",
        ));
    }

    // The byte after the entropy holds the checksum in its high bits; the
    // rest of that byte is padding from the unpacking.
    let checksum_byte = extended.pop().ok_or(Error::InternalInvariant(
        "unpacked buffer is empty",
    ))?;
    let entropy = Entropy::from_zeroizing(extended)?;

    let value = checksum_byte >> (8 - entropy.strength().checksum_bits());
    if !checksum::verify(&entropy, value) {
        return Err(Error::ChecksumMismatch);
    }

    Ok(entropy)
}

/// Checks that `sentence` is a valid mnemonic under `wordlist`
///
/// # Errors
/// Same as [`decode`]
pub fn validate(sentence: &str, wordlist: &Wordlist) -> Result<()> {
    decode(sentence, wordlist).map(drop)
}

/// Looks up the word index of every word in `sentence`
///
/// No word count or checksum validation is performed.
///
/// # Errors
/// Returns [`Error::UnknownWord`] for the first word missing from `wordlist`
pub fn indices_of(sentence: &str, wordlist: &Wordlist) -> Result<Zeroizing<Vec<u16>>> {
    let mut indices = Zeroizing::new(Vec::with_capacity(24));
    for word in sentence.split_whitespace() {
        indices.push(wordlist.index_of(word)?);
    }
    Ok(indices)
}

/// Number of whitespace-separated words in `sentence`
#[must_use]
pub fn word_count(sentence: &str) -> usize {
    sentence.split_whitespace().count()
}
