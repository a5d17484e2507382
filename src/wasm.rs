//! WASM bindings for mnemonic39
//!
//! This module provides JavaScript-friendly bindings for generating, checking
//! and stretching mnemonics with the bundled wordlists.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::commands;
use crate::domain::{GenerateConfig, WordCount};
use crate::wordlist::{DEFAULT_LANGUAGE, default_provider};

/// Initialize panic hook for better error messages in the browser console
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of validating a mnemonic (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the mnemonic decoded with a matching checksum
    pub valid: bool,
    /// Number of whitespace-separated words in the input
    pub word_count: usize,
    /// Entropy as lowercase hex, when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entropy_hex: Option<String>,
    /// Why validation failed, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn validation_result(mnemonic: &str) -> ValidationResult {
    let word_count = crate::codec::word_count(mnemonic);
    match commands::check_mnemonic(mnemonic, DEFAULT_LANGUAGE, default_provider()) {
        Ok(report) => ValidationResult {
            valid: true,
            word_count,
            entropy_hex: Some(report.entropy_hex),
            error: None,
        },
        Err(e) => ValidationResult {
            valid: false,
            word_count,
            entropy_hex: None,
            error: Some(format!("{:#}", e)),
        },
    }
}

/// Generate a random BIP39 mnemonic
///
/// # Arguments
/// * `word_count` - Number of words (12, 15, 18, 21 or 24)
///
/// # Returns
/// A randomly generated English mnemonic, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const mnemonic12 = wasm_generate_mnemonic(12);
/// const mnemonic24 = wasm_generate_mnemonic(24);
/// console.log(`Random 12-word: ${mnemonic12}`);
/// ```
#[wasm_bindgen]
pub fn wasm_generate_mnemonic(word_count: u8) -> Result<String, JsValue> {
    let strength = WordCount::new(usize::from(word_count))
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .strength();
    let config = GenerateConfig::new(*strength, DEFAULT_LANGUAGE)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))?;

    // The getrandom crate (with "js" feature) will use browser's crypto.getRandomValues()
    let generated = commands::generate_mnemonic(&config, default_provider(), None)
        .map_err(|e| JsValue::from_str(&format!("Generate failed: {:#}", e)))?;

    Ok(generated.sentence.to_string())
}

/// Render hex entropy as an English mnemonic
///
/// # Example (JavaScript)
/// ```javascript
/// const mnemonic = wasm_mnemonic_from_entropy("00000000000000000000000000000000");
/// // "abandon abandon ... about"
/// ```
#[wasm_bindgen]
pub fn wasm_mnemonic_from_entropy(entropy_hex: &str) -> Result<String, JsValue> {
    commands::mnemonic_from_entropy(entropy_hex, DEFAULT_LANGUAGE, default_provider())
        .map(|sentence| sentence.to_string())
        .map_err(|e| JsValue::from_str(&format!("Conversion failed: {:#}", e)))
}

/// Derive the 64-byte seed of a mnemonic as hex
///
/// The mnemonic is validated first; an invalid checksum is an error.
///
/// # Example (JavaScript)
/// ```javascript
/// const seed = wasm_mnemonic_to_seed(mnemonic, "TREZOR");
/// console.log(seed.length); // 128
/// ```
#[wasm_bindgen]
pub fn wasm_mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<String, JsValue> {
    commands::mnemonic_to_seed(mnemonic, passphrase, DEFAULT_LANGUAGE, default_provider())
        .map(|seed| seed.to_string())
        .map_err(|e| JsValue::from_str(&format!("Seed derivation failed: {:#}", e)))
}

/// Validate a mnemonic and describe the result as JSON
///
/// Never fails for invalid mnemonics; `valid` is false and `error` explains why.
///
/// # Example (JavaScript)
/// ```javascript
/// const result = JSON.parse(wasm_validate_mnemonic("abandon abandon ..."));
/// if (!result.valid) console.log(result.error);
/// ```
#[wasm_bindgen]
pub fn wasm_validate_mnemonic(mnemonic: &str) -> Result<String, JsValue> {
    serde_json::to_string(&validation_result(mnemonic))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

/// Same as [`wasm_validate_mnemonic`] but returns a JS object instead of JSON text
#[wasm_bindgen]
pub fn wasm_validate_mnemonic_object(mnemonic: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&validation_result(mnemonic))
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}
