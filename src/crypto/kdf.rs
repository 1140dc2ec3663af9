//! # Key Derivation Functions
//!
//! Two derivations live here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    KEY DERIVATION                                       │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  1. Envelope key (per message, HKDF-SHA256)                            │
//! │                                                                         │
//! │     ikm  = X25519 shared secret                                        │
//! │     salt = ephemeral_pk || recipient_pk                                │
//! │     info = "seedseal-ecies-v1"                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │     44 bytes ──► [0..32]  AES-256 key                                  │
//! │              └─► [32..44] GCM nonce                                    │
//! │                                                                         │
//! │  2. Hierarchical key (SLIP-0010, curve25519, HMAC-SHA512)              │
//! │                                                                         │
//! │     I = HMAC-SHA512("curve25519 seed", seed)                           │
//! │     k, c = I[..32], I[32..]                                            │
//! │           │                                                             │
//! │           ▼  for each hardened index i                                 │
//! │     I = HMAC-SHA512(c, 0x00 || k || ser32(i))                          │
//! │     k, c = I[..32], I[32..]                                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Considerations
//!
//! | Aspect | Design Choice |
//! |--------|---------------|
//! | KDF Algorithm | HKDF-SHA256 |
//! | Context Binding | salt covers both public keys |
//! | Version String | "-v1" suffix in `info` |
//! | Hierarchy | hardened-only, as SLIP-0010 defines for curve25519 |

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::encryption::{EncryptionKey, Nonce, NONCE_SIZE, SYMMETRIC_KEY_SIZE};
use super::KEY_SIZE;
use crate::error::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// Domain separation strings
pub mod domain {
    /// HKDF `info` for the ECIES envelope key and nonce
    pub const ECIES_ENVELOPE: &[u8] = b"seedseal-ecies-v1";

    /// SLIP-0010 master key for curve25519
    pub const SLIP10_CURVE25519_SEED: &[u8] = b"curve25519 seed";
}

/// Offset added to a child index to mark it hardened
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

const ENVELOPE_OKM_SIZE: usize = SYMMETRIC_KEY_SIZE + NONCE_SIZE;

/// Derive the AES key and nonce for one ECIES message
///
/// Both public keys go into the salt so a ciphertext is bound to the exact
/// ephemeral/recipient pair that produced it.
pub fn derive_envelope_key(
    shared_secret: &[u8; 32],
    ephemeral_public: &[u8; KEY_SIZE],
    recipient_public: &[u8; KEY_SIZE],
) -> Result<(EncryptionKey, Nonce)> {
    let mut salt = [0u8; KEY_SIZE * 2];
    salt[..KEY_SIZE].copy_from_slice(ephemeral_public);
    salt[KEY_SIZE..].copy_from_slice(recipient_public);

    let hkdf = Hkdf::<Sha256>::new(Some(&salt[..]), shared_secret);
    let mut okm = [0u8; ENVELOPE_OKM_SIZE];
    hkdf.expand(domain::ECIES_ENVELOPE, &mut okm)
        .map_err(|_| Error::EncryptionFailure("HKDF expansion failed".into()))?;

    let mut key = [0u8; SYMMETRIC_KEY_SIZE];
    key.copy_from_slice(&okm[..SYMMETRIC_KEY_SIZE]);
    let mut nonce = [0u8; NONCE_SIZE];
    nonce.copy_from_slice(&okm[SYMMETRIC_KEY_SIZE..]);
    okm.zeroize();

    let derived = (EncryptionKey::from_bytes(key), Nonce::from_bytes(nonce));
    key.zeroize();
    Ok(derived)
}

/// A SLIP-0010 extended private key: key bytes plus chain code
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ExtendedKey {
    key: [u8; KEY_SIZE],
    chain_code: [u8; 32],
}

impl ExtendedKey {
    /// Master key from a BIP39 seed
    pub fn master(seed: &[u8]) -> Result<Self> {
        Self::from_hmac(domain::SLIP10_CURVE25519_SEED, &[seed])
    }

    /// Hardened child at `index` (the hardened offset is added here)
    pub fn derive_hardened(&self, index: u32) -> Result<Self> {
        if index >= HARDENED_OFFSET {
            return Err(Error::InvalidDerivationPath(format!(
                "child index {} is out of range",
                index
            )));
        }
        let ser = (index | HARDENED_OFFSET).to_be_bytes();
        Self::from_hmac(&self.chain_code, &[&[0u8][..], &self.key[..], &ser[..]])
    }

    /// Walk a sequence of hardened indices from this key
    pub fn derive_path(&self, indices: &[u32]) -> Result<Self> {
        let mut current = Self {
            key: self.key,
            chain_code: self.chain_code,
        };
        for &index in indices {
            current = current.derive_hardened(index)?;
        }
        Ok(current)
    }

    /// The private key bytes at this node
    pub fn key_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    fn from_hmac(hmac_key: &[u8], parts: &[&[u8]]) -> Result<Self> {
        let mut mac = HmacSha512::new_from_slice(hmac_key)
            .map_err(|e| Error::InvalidDerivationPath(format!("HMAC init: {}", e)))?;
        for part in parts {
            mac.update(part);
        }
        let mut output = mac.finalize().into_bytes();

        let mut node = Self {
            key: [0u8; KEY_SIZE],
            chain_code: [0u8; 32],
        };
        node.key.copy_from_slice(&output[..32]);
        node.chain_code.copy_from_slice(&output[32..]);
        output.as_mut_slice().zeroize();
        Ok(node)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_hex;

    #[test]
    fn test_envelope_key_deterministic() {
        let shared = [42u8; 32];
        let (_, n1) = derive_envelope_key(&shared, &[1u8; 32], &[2u8; 32]).unwrap();
        let (_, n2) = derive_envelope_key(&shared, &[1u8; 32], &[2u8; 32]).unwrap();
        assert_eq!(n1, n2);
    }

    #[test]
    fn test_envelope_key_bound_to_public_keys() {
        let shared = [42u8; 32];
        let (_, n1) = derive_envelope_key(&shared, &[1u8; 32], &[2u8; 32]).unwrap();
        let (_, n2) = derive_envelope_key(&shared, &[2u8; 32], &[1u8; 32]).unwrap();
        assert_ne!(n1, n2);
    }

    // SLIP-0010 test vector 1 for curve25519, seed 000102030405060708090a0b0c0d0e0f
    #[test]
    fn test_slip10_curve25519_vector_1() {
        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();

        let master = ExtendedKey::master(&seed).unwrap();
        assert_eq!(
            encode_hex(master.key_bytes()),
            "d70a59c2e68b836cc4bbe8bcae425169b9e2384f3905091e3d60b890e90cd92c"
        );
        assert_eq!(
            encode_hex(&master.chain_code),
            "77997ca3588a1a34f3589279ea2962247abfe5277d52770a44c706378c710768"
        );

        let child = master.derive_hardened(0).unwrap();
        assert_eq!(
            encode_hex(child.key_bytes()),
            "cd7630d7513cbe80515f7317cdb9a47ad4a56b63c3f1dc29583ab8d4cc25a9b2"
        );
    }

    #[test]
    fn test_derive_path_matches_stepwise() {
        let master = ExtendedKey::master(&[3u8; 64]).unwrap();
        let stepwise = master
            .derive_hardened(44)
            .unwrap()
            .derive_hardened(0)
            .unwrap();
        let walked = master.derive_path(&[44, 0]).unwrap();
        assert_eq!(stepwise.key_bytes(), walked.key_bytes());
    }

    #[test]
    fn test_empty_path_is_master() {
        let master = ExtendedKey::master(&[3u8; 64]).unwrap();
        let walked = master.derive_path(&[]).unwrap();
        assert_eq!(master.key_bytes(), walked.key_bytes());
    }

    #[test]
    fn test_index_out_of_range() {
        let master = ExtendedKey::master(&[3u8; 64]).unwrap();
        assert!(matches!(
            master.derive_hardened(HARDENED_OFFSET),
            Err(Error::InvalidDerivationPath(_))
        ));
    }
}
