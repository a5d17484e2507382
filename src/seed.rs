//! Seed derivation: PBKDF2-HMAC-SHA512 over the mnemonic sentence

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use tracing::trace;
use zeroize::Zeroizing;

pub use crate::domain::SEED_LEN;
use crate::domain::Seed;

/// Iteration count fixed by BIP39
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix; the passphrase is appended to it
pub const SALT_PREFIX: &str = "mnemonic";

/// Stretches `sentence` and `passphrase` into a 64-byte seed
///
/// The sentence is the password and `"mnemonic" + passphrase` is the salt.
/// Both are used as given, byte for byte. Any string is accepted; the
/// sentence is not validated against a wordlist here.
///
/// # Examples
///
/// ```rust
/// use mnemonic39::seed::derive_seed;
///
/// let a = derive_seed("abandon abandon about", "");
/// let b = derive_seed("abandon abandon about", "");
/// assert_eq!(a, b);
/// assert_ne!(a, derive_seed("abandon abandon about", "x"));
/// ```
#[must_use]
pub fn derive_seed(sentence: &str, passphrase: &str) -> Seed {
    trace!(rounds = PBKDF2_ROUNDS, "deriving seed");
    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.push_str(passphrase);

    let mut out = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2_hmac::<Sha512>(sentence.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut *out);
    Seed::from_bytes(out)
}
