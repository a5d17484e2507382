//! Sources of random entropy

use zeroize::Zeroizing;

use crate::domain::{Entropy, Strength};
use crate::error::{Error, Result};

/// Supplies cryptographically secure random bytes
pub trait EntropySource: Send + Sync {
    /// Fills `buf` completely
    ///
    /// # Errors
    /// Returns [`Error::EntropySourceFailure`] if the source cannot deliver
    fn fill(&self, buf: &mut [u8]) -> Result<()>;
}

/// Operating system randomness via `getrandom`
///
/// On wasm32 this is the browser's `crypto.getRandomValues()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buf).map_err(|e| Error::EntropySourceFailure(e.to_string()))
    }
}

/// Draws fresh entropy of the given strength from `source`
///
/// Failures propagate unchanged; there is no fallback source.
///
/// # Errors
/// Returns [`Error::EntropySourceFailure`] if the source fails
pub fn generate(source: &dyn EntropySource, strength: Strength) -> Result<Entropy> {
    let mut bytes = Zeroizing::new(vec![0u8; strength.byte_len()]);
    source.fill(&mut bytes)?;
    Entropy::from_zeroizing(bytes)
}
