//! Error taxonomy for mnemonic encoding, decoding and seed derivation

/// Library-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the codec can report to a caller.
///
/// Construction of a [`crate::Mnemonic`] is all-or-nothing: any of these
/// errors means no value was produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid entropy length: {bits} bits (expected 128, 160, 192, 224 or 256)")]
    InvalidEntropyLength { bits: usize },

    #[error("invalid word count: {count} (expected 12, 15, 18, 21 or 24)")]
    InvalidWordCount { count: usize },

    #[error("word '{0}' not found in wordlist")]
    UnknownWord(String),

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("wordlist '{language}' unavailable: {reason}")]
    WordlistUnavailable { language: String, reason: String },

    #[error("incomplete wordlist '{language}': expected 2048 distinct words, got {count}")]
    IncompleteWordlist { language: String, count: usize },

    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(String),

    #[error("entropy source failure: {0}")]
    EntropySourceFailure(String),

    #[error("internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}
