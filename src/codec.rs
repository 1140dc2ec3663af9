//! # Codec Adapters
//!
//! Hex encoding and string-level wrappers over the ECIES engine.
//!
//! ```text
//! encrypt_string(pk, text)  = encode_hex(encrypt(pk, utf8(text)))
//! decrypt_string(sk, hex)   = utf8(decrypt(sk, decode_hex(hex)))
//! ```
//!
//! Hex parsing is strict: only `[0-9a-fA-F]`, an even number of digits and at
//! least one byte. Anything else is `InvalidEncoding`.

use zeroize::Zeroize;

use crate::crypto::{self, PrivateKey, PublicKey};
use crate::error::{Error, Result};

/// Lowercase hex, two digits per byte
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hex string into bytes
///
/// Upper and lower case digits are both accepted.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::InvalidEncoding("empty hex string".into()));
    }
    if input.len() % 2 != 0 {
        return Err(Error::InvalidEncoding(format!(
            "odd number of hex digits ({})",
            input.len()
        )));
    }
    hex::decode(input).map_err(|e| Error::InvalidEncoding(e.to_string()))
}

/// Encrypt a UTF-8 string and return the ciphertext as hex
pub fn encrypt_string(public_key: &PublicKey, text: &str) -> Result<String> {
    let ciphertext = crypto::encrypt(public_key, text.as_bytes())?;
    Ok(encode_hex(&ciphertext))
}

/// Decrypt a hex ciphertext back into a UTF-8 string
///
/// ## Errors
///
/// - `InvalidEncoding` if `hex_ciphertext` is not strict hex
/// - any error of [`crypto::decrypt`]
/// - `InvalidUtf8` if the plaintext is not UTF-8
pub fn decrypt_string(private_key: &PrivateKey, hex_ciphertext: &str) -> Result<String> {
    let ciphertext = decode_hex(hex_ciphertext)?;
    let plaintext = crypto::decrypt(private_key, &ciphertext)?;
    String::from_utf8(plaintext).map_err(|e| {
        e.into_bytes().zeroize();
        Error::InvalidUtf8
    })
}

// ============================================================================
// TESTS
// ============================================================================
