//! # File Envelope
//!
//! Encrypts a file's bytes together with its name so both come back on
//! decryption.
//!
//! ```text
//! plaintext frame (encrypted as one ECIES message):
//!
//! offset 0             2                2+L
//!        | name_len u16 | name (UTF-8, L) | data ... |
//!        |  big endian  |                 |          |
//! ```
//!
//! Only in-memory buffers are handled here; reading and writing files is the
//! caller's job.

use zeroize::Zeroize;

use crate::crypto::{self, PrivateKey, PublicKey};
use crate::error::{Error, Result};

/// Size of the name length prefix
pub const NAME_LEN_SIZE: usize = 2;

/// Longest file name the frame can carry, in bytes
pub const MAX_FILE_NAME_LEN: usize = u16::MAX as usize;

/// A decrypted file envelope
#[derive(Clone, PartialEq, Eq)]
pub struct DecryptedFile {
    /// Original file name
    pub file_name: String,
    /// File contents
    pub data: Vec<u8>,
}

impl std::fmt::Debug for DecryptedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecryptedFile")
            .field("file_name", &self.file_name)
            .field("data_len", &self.data.len())
            .finish()
    }
}

/// Encrypt `data` and `file_name` for the holder of `public_key`
pub fn encrypt_file(public_key: &PublicKey, file_name: &str, data: &[u8]) -> Result<Vec<u8>> {
    let mut frame = frame(file_name, data)?;
    let result = crypto::encrypt(public_key, &frame);
    frame.zeroize();

    tracing::debug!(name_len = file_name.len(), data_len = data.len(), "file encrypted");
    result
}

/// Decrypt a file envelope
///
/// ## Errors
///
/// - any error of [`crypto::decrypt`]
/// - `InvalidFileEnvelope` if the decrypted frame is truncated or the name is
///   not UTF-8
pub fn decrypt_file(private_key: &PrivateKey, ciphertext: &[u8]) -> Result<DecryptedFile> {
    let mut plaintext = crypto::decrypt(private_key, ciphertext)?;
    let file = unframe(&plaintext);
    plaintext.zeroize();
    file
}

fn frame(file_name: &str, data: &[u8]) -> Result<Vec<u8>> {
    let name_len = u16::try_from(file_name.len()).map_err(|_| {
        Error::InvalidFileEnvelope(format!(
            "file name is {} bytes, limit is {}",
            file_name.len(),
            MAX_FILE_NAME_LEN
        ))
    })?;

    let mut frame = Vec::with_capacity(NAME_LEN_SIZE + file_name.len() + data.len());
    frame.extend_from_slice(&name_len.to_be_bytes());
    frame.extend_from_slice(file_name.as_bytes());
    frame.extend_from_slice(data);
    Ok(frame)
}

fn unframe(frame: &[u8]) -> Result<DecryptedFile> {
    if frame.len() < NAME_LEN_SIZE {
        return Err(Error::InvalidFileEnvelope("missing name length".into()));
    }
    let (len_bytes, rest) = frame.split_at(NAME_LEN_SIZE);
    let name_len = u16::from_be_bytes([len_bytes[0], len_bytes[1]]) as usize;
    if rest.len() < name_len {
        return Err(Error::InvalidFileEnvelope(format!(
            "name length {} exceeds frame",
            name_len
        )));
    }

    let (name, data) = rest.split_at(name_len);
    let file_name = std::str::from_utf8(name)
        .map_err(|_| Error::InvalidFileEnvelope("file name is not UTF-8".into()))?;

    Ok(DecryptedFile {
        file_name: file_name.to_string(),
        data: data.to_vec(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
