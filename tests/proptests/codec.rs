//! Property tests for entropy/sentence encoding and decoding

use mnemonic39::Error;
use mnemonic39::codec::{decode, encode};
use mnemonic39::domain::Entropy;
use mnemonic39::wordlist::default_provider;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// Wrapper for entropy of a random valid strength
#[derive(Clone, Debug)]
pub struct ValidEntropy(pub Vec<u8>);

impl Arbitrary for ValidEntropy {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = *g.choose(&[16usize, 20, 24, 28, 32]).unwrap_or(&16);
        let bytes = (0..len).map(|_| u8::arbitrary(g)).collect();
        ValidEntropy(bytes)
    }
}

/// Decoding an encoded sentence yields the original entropy
#[quickcheck]
fn prop_round_trip(entropy: ValidEntropy) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let entropy = Entropy::new(&entropy.0).unwrap();
    let sentence = encode(&entropy, &wordlist).unwrap();
    decode(&sentence, &wordlist).unwrap() == entropy
}

/// Word count is ENT * 33 / 32 / 11
#[quickcheck]
fn prop_word_count_follows_strength(entropy: ValidEntropy) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let bits = entropy.0.len() * 8;
    let entropy = Entropy::new(&entropy.0).unwrap();
    let sentence = encode(&entropy, &wordlist).unwrap();
    sentence.split(' ').count() == bits * 33 / 32 / 11
}

/// Encoding is deterministic
#[quickcheck]
fn prop_encode_deterministic(entropy: ValidEntropy) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let entropy = Entropy::new(&entropy.0).unwrap();
    encode(&entropy, &wordlist).unwrap() == encode(&entropy, &wordlist).unwrap()
}

/// Flipping any entropy bit changes the sentence
#[quickcheck]
fn prop_bit_flip_changes_sentence(entropy: ValidEntropy, position: usize) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let mut flipped = entropy.0.clone();
    let bit = position % (flipped.len() * 8);
    flipped[bit / 8] ^= 0x80 >> (bit % 8);

    let original = encode(&Entropy::new(&entropy.0).unwrap(), &wordlist).unwrap();
    let changed = encode(&Entropy::new(&flipped).unwrap(), &wordlist).unwrap();
    original != changed
}

/// A last word differing only in its lowest (checksum) bit is rejected
///
/// Every strength carries at least four checksum bits, all at the end of the
/// last word, so toggling bit 0 of that word leaves the entropy untouched and
/// always breaks the checksum.
#[quickcheck]
fn prop_corrupted_checksum_detected(entropy: ValidEntropy) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let sentence = encode(&Entropy::new(&entropy.0).unwrap(), &wordlist).unwrap();

    let mut words: Vec<&str> = sentence.split(' ').collect();
    let Some(last) = words.last_mut() else {
        return false;
    };
    let index = wordlist.index_of(*last).unwrap();
    *last = wordlist.word_at(index ^ 1).unwrap();

    decode(&words.join(" "), &wordlist) == Err(Error::ChecksumMismatch)
}

/// Replacing a word with a non-list word is reported as unknown
#[quickcheck]
fn prop_unknown_word_detected(entropy: ValidEntropy, position: usize) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let sentence = encode(&Entropy::new(&entropy.0).unwrap(), &wordlist).unwrap();

    let mut words: Vec<&str> = sentence.split(' ').collect();
    let target = position % words.len();
    words[target] = "xylophone";

    decode(&words.join(" "), &wordlist) == Err(Error::UnknownWord("xylophone".to_string()))
}

/// Dropping or adding a word is rejected by word count before any lookup
#[quickcheck]
fn prop_wrong_word_count_detected(entropy: ValidEntropy) -> bool {
    let wordlist = default_provider().wordlist("english").unwrap();
    let sentence = encode(&Entropy::new(&entropy.0).unwrap(), &wordlist).unwrap();
    let words: Vec<&str> = sentence.split(' ').collect();
    let count = words.len();

    let shorter = words[..count - 1].join(" ");
    let longer = format!("{} abandon", sentence.as_str());

    decode(&shorter, &wordlist) == Err(Error::InvalidWordCount { count: count - 1 })
        && decode(&longer, &wordlist) == Err(Error::InvalidWordCount { count: count + 1 })
}
