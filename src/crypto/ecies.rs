//! # ECIES Engine
//!
//! Public-key encryption: ephemeral-static X25519, HKDF-SHA256, AES-256-GCM.
//!
//! ## Encryption Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ECIES ENCRYPTION FLOW                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  SENDER                                                                │
//! │  ─────────────────────────────────────────────────────────────────      │
//! │                                                                         │
//! │  Step 1: Fresh ephemeral keypair (OS RNG, 32 bytes)                    │
//! │  Step 2: shared = X25519(ephemeral_secret, recipient_public)           │
//! │  Step 3: key, nonce = HKDF(shared, eph_pk || recipient_pk)             │
//! │  Step 4: body || tag = AES-256-GCM(key, nonce, plaintext)              │
//! │  Step 5: output eph_pk || body || tag                                  │
//! │                                                                         │
//! │  RECIPIENT                                                             │
//! │  ─────────────────────────────────────────────────────────────────      │
//! │                                                                         │
//! │  Step 1: split eph_pk | body || tag  (MalformedCiphertext if short)    │
//! │  Step 2: shared = X25519(recipient_secret, eph_pk) [SAME as sender]    │
//! │  Step 3: same HKDF                                                     │
//! │  Step 4: verify tag, decrypt (AuthenticationFailure on mismatch)       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//!
//! ```text
//! offset 0        32                     32+n          48+n
//!        | eph_pk | ciphertext body (n)  | tag (16)    |
//! ```
//!
//! | Field | Size | Notes |
//! |-------|------|-------|
//! | `eph_pk` | [`EPHEMERAL_KEY_SIZE`] = 32 | X25519 u-coordinate |
//! | nonce | `NONCE_SIZE` = 12 | derived by HKDF, not transmitted |
//! | body | n = plaintext length | AES-GCM keystream output |
//! | tag | [`TAG_SIZE`] = 16 | GHASH authentication tag |

use rand::rngs::OsRng;
use rand_core::RngCore;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::Zeroize;

use super::encryption::{self, TAG_SIZE};
use super::kdf::derive_envelope_key;
use super::keys::{PrivateKey, PublicKey};
use super::KEY_SIZE;
use crate::error::{Error, Result};

/// Size of the ephemeral public key at the head of every ciphertext
pub const EPHEMERAL_KEY_SIZE: usize = KEY_SIZE;

/// Shortest valid ciphertext: ephemeral key plus tag (empty plaintext)
pub const MIN_CIPHERTEXT_SIZE: usize = EPHEMERAL_KEY_SIZE + TAG_SIZE;

/// Number of bytes `encrypt` adds to a plaintext
pub const CIPHERTEXT_OVERHEAD: usize = MIN_CIPHERTEXT_SIZE;

/// Borrowed view of a ciphertext split into its fields
#[derive(Debug, Clone, Copy)]
pub struct CiphertextParts<'a> {
    /// Sender's ephemeral public key
    pub ephemeral_public: [u8; EPHEMERAL_KEY_SIZE],
    /// Encrypted body followed by the tag
    pub sealed: &'a [u8],
}

impl<'a> CiphertextParts<'a> {
    /// Split a wire buffer
    ///
    /// Only the buffer length is inspected, so the outcome depends on public
    /// data alone.
    pub fn parse(ciphertext: &'a [u8]) -> Result<Self> {
        if ciphertext.len() < MIN_CIPHERTEXT_SIZE {
            return Err(Error::MalformedCiphertext);
        }
        let (head, sealed) = ciphertext.split_at(EPHEMERAL_KEY_SIZE);
        let mut ephemeral_public = [0u8; EPHEMERAL_KEY_SIZE];
        ephemeral_public.copy_from_slice(head);
        Ok(Self {
            ephemeral_public,
            sealed,
        })
    }

    /// Plaintext length this ciphertext decrypts to
    pub fn body_len(&self) -> usize {
        self.sealed.len() - TAG_SIZE
    }
}

/// Encrypt `plaintext` for the holder of `public_key`
///
/// Any byte sequence is accepted, including the empty one. Two calls with
/// the same inputs produce different ciphertexts because each uses a fresh
/// ephemeral key.
///
/// ## Errors
///
/// - `RandomnessUnavailable` if the OS RNG cannot be read
/// - `EncryptionFailure` if the recipient key is a low-order point or the
///   cipher reports an internal error
pub fn encrypt(public_key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut ephemeral = [0u8; KEY_SIZE];
    OsRng.try_fill_bytes(&mut ephemeral).map_err(|e| {
        tracing::warn!("OS random source failed: {}", e);
        Error::RandomnessUnavailable
    })?;

    let result = encrypt_with_ephemeral(ephemeral, public_key, plaintext);
    ephemeral.zeroize();
    result
}

/// Encrypt with caller-supplied ephemeral secret bytes
///
/// Deterministic; exists so known-answer vectors can be produced. Never reuse
/// an ephemeral secret across messages.
pub(crate) fn encrypt_with_ephemeral(
    ephemeral: [u8; KEY_SIZE],
    public_key: &PublicKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let ephemeral_secret = StaticSecret::from(ephemeral);
    let ephemeral_public = X25519PublicKey::from(&ephemeral_secret);
    let recipient = public_key.to_x25519();

    let shared = ephemeral_secret.diffie_hellman(&recipient);
    if !shared.was_contributory() {
        return Err(Error::EncryptionFailure(
            "recipient public key is a low-order point".into(),
        ));
    }

    let (key, nonce) = derive_envelope_key(
        shared.as_bytes(),
        ephemeral_public.as_bytes(),
        recipient.as_bytes(),
    )?;
    let sealed = encryption::seal(&key, &nonce, plaintext)?;

    let mut out = Vec::with_capacity(EPHEMERAL_KEY_SIZE + sealed.len());
    out.extend_from_slice(ephemeral_public.as_bytes());
    out.extend_from_slice(&sealed);

    tracing::debug!(
        recipient = %public_key.fingerprint(),
        plaintext_len = plaintext.len(),
        ciphertext_len = out.len(),
        "ecies encrypt"
    );
    Ok(out)
}

/// Decrypt a ciphertext produced by [`encrypt`]
///
/// The tag is verified before any plaintext is released, and the comparison
/// inside AES-GCM is constant time.
///
/// ## Errors
///
/// - `MalformedCiphertext` if the buffer is shorter than
///   [`MIN_CIPHERTEXT_SIZE`]
/// - `AuthenticationFailure` for any tampering, a wrong private key, or a
///   low-order ephemeral key
pub fn decrypt(private_key: &PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let parts = CiphertextParts::parse(ciphertext)?;

    let secret = private_key.to_x25519();
    let recipient_public = X25519PublicKey::from(&secret);
    let ephemeral_public = X25519PublicKey::from(parts.ephemeral_public);

    let shared = secret.diffie_hellman(&ephemeral_public);
    let contributory = shared.was_contributory();

    let (key, nonce) = derive_envelope_key(
        shared.as_bytes(),
        ephemeral_public.as_bytes(),
        recipient_public.as_bytes(),
    )
    .map_err(|_| Error::AuthenticationFailure)?;

    // Always run the AEAD so a low-order ephemeral key costs the same as a
    // bad tag.
    let opened = encryption::open(&key, &nonce, parts.sealed);
    match opened {
        Ok(plaintext) if contributory => {
            tracing::debug!(plaintext_len = plaintext.len(), "ecies decrypt");
            Ok(plaintext)
        }
        Ok(mut plaintext) => {
            plaintext.zeroize();
            Err(Error::AuthenticationFailure)
        }
        Err(e) => {
            tracing::debug!("ecies decrypt rejected ciphertext");
            Err(e)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
