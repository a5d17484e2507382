//! BIP39 mnemonic codes: entropy, sentences and seeds
//!
//! - [`codec`] converts entropy to a sentence and back, verifying the checksum
//! - [`seed`] stretches a sentence and passphrase into a 64-byte seed
//! - [`Mnemonic`] ties both together behind an immutable value
//! - [`wordlist`] serves the 2048-word lists, memoized per language

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod domain;
pub mod entropy;
pub mod error;
pub mod mnemonic;
pub mod seed;
pub mod wordlist;

#[cfg(feature = "cli")]
pub mod cli;
pub mod commands;

pub mod wasm;

pub use error::{Error, Result};
pub use mnemonic::Mnemonic;
