//! Property tests for the `Mnemonic` value and seed derivation

use mnemonic39::Mnemonic;
use mnemonic39::seed::derive_seed;
use quickcheck::{QuickCheck, TestResult};

use super::codec::ValidEntropy;

/// Seeds are expensive (2048 PBKDF2 rounds), so these properties run fewer cases
const SEED_CASES: u64 = 20;

/// Constructing from entropy or from its sentence yields the same seed
#[test]
fn prop_seed_independent_of_construction_path() {
    fn property(entropy: ValidEntropy, passphrase: String) -> TestResult {
        let from_entropy = Mnemonic::from_entropy(&entropy.0, &passphrase).unwrap();
        let sentence = from_entropy.sentence().unwrap();
        let from_sentence = Mnemonic::from_sentence(sentence, &passphrase, "english").unwrap();

        TestResult::from_bool(
            from_entropy.seed_bytes().unwrap() == from_sentence.seed_bytes().unwrap()
                && from_entropy.entropy() == from_sentence.entropy(),
        )
    }

    QuickCheck::new()
        .tests(SEED_CASES)
        .quickcheck(property as fn(ValidEntropy, String) -> TestResult);
}

/// Seed derivation is deterministic and matches the accessor
#[test]
fn prop_seed_deterministic() {
    fn property(entropy: ValidEntropy, passphrase: String) -> bool {
        let mnemonic = Mnemonic::from_entropy(&entropy.0, &passphrase).unwrap();
        let sentence = mnemonic.sentence().unwrap();
        let first = derive_seed(sentence, &passphrase);
        let second = derive_seed(sentence, &passphrase);
        first == second && mnemonic.seed().unwrap() == &first
    }

    QuickCheck::new()
        .tests(SEED_CASES)
        .quickcheck(property as fn(ValidEntropy, String) -> bool);
}

/// Seed hex is the lowercase encoding of the seed bytes
#[test]
fn prop_seed_hex_matches_bytes() {
    fn property(entropy: ValidEntropy) -> bool {
        let mnemonic = Mnemonic::from_entropy(&entropy.0, "").unwrap();
        let seed_hex = mnemonic.seed_hex().unwrap();
        seed_hex.len() == 128
            && seed_hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            && hex::decode(seed_hex.as_str()).unwrap() == mnemonic.seed_bytes().unwrap()
    }

    QuickCheck::new()
        .tests(SEED_CASES)
        .quickcheck(property as fn(ValidEntropy) -> bool);
}

/// Random mnemonics of every strength decode back to themselves
#[quickcheck_macros::quickcheck]
fn prop_random_mnemonic_round_trip(choice: u8) -> bool {
    let bits = [128u16, 160, 192, 224, 256][usize::from(choice) % 5];
    let mnemonic = Mnemonic::random(bits, "").unwrap();
    let sentence = mnemonic.sentence().unwrap();
    let restored = Mnemonic::from_sentence(sentence, "", "english").unwrap();
    restored.entropy() == mnemonic.entropy()
        && sentence.split(' ').count() == usize::from(bits) * 33 / 32 / 11
}
