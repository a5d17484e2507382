//! Domain types for mnemonic encoding
//!
//! This module contains validated newtypes shared by the codec, the seed
//! deriver and the command surfaces:
//! - [`Strength`] - Entropy bit-length (128, 160, 192, 224 or 256)
//! - [`WordCount`] - Sentence length (12, 15, 18, 21 or 24)
//! - [`Entropy`] - Entropy bytes of a valid strength, wiped on drop
//! - [`Seed`] - 64-byte derived seed, wiped on drop
//! - [`GenerateConfig`] - Validated strength and language pair

mod config;
mod entropy;
mod strength;
mod word_count;

pub use config::GenerateConfig;
pub use entropy::{Entropy, SEED_LEN, Seed};
pub use strength::Strength;
pub use word_count::WordCount;
