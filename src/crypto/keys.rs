//! # Key Material
//!
//! Immutable wrappers around raw X25519 key bytes.
//!
//! ## Key Types
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          KEY TYPES                                      │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  KeyMaterial { role, bytes }                                    │   │
//! │  │  ─────────────────────────────                                   │   │
//! │  │                                                                  │   │
//! │  │  • role: Public | Private (fixed at construction)              │   │
//! │  │  • bytes: exactly 32 bytes (X25519 canonical size)             │   │
//! │  │  • copy-out access only, zeroized on drop                      │   │
//! │  │                                                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌───────────────────────┐          ┌───────────────────────┐          │
//! │  │  PublicKey            │          │  PrivateKey           │          │
//! │  │  (role = Public)      │◄─────────│  (role = Private)     │          │
//! │  │                       │ X25519   │                       │          │
//! │  │  • shared freely      │ (k, 9)   │  • never logged       │          │
//! │  │  • hex serializable   │          │  • redacted Debug     │          │
//! │  └───────────────────────┘          └───────────────────────┘          │
//! │                                                                         │
//! │  Keypair = { public_key, private_key }                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine takes `&PublicKey` for encryption and `&PrivateKey` for
//! decryption, so passing a key of the wrong role does not compile.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KEY_SIZE;
use crate::codec::{decode_hex, encode_hex};
use crate::error::{Error, Result};

/// Whether key bytes are the public or the private half of a keypair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Public key, safe to share
    Public,
    /// Private key, must stay secret
    Private,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::Public => write!(f, "public"),
            KeyRole::Private => write!(f, "private"),
        }
    }
}

/// Raw key bytes tagged with their role
///
/// ## Invariants
///
/// - `bytes` is always exactly [`KEY_SIZE`] long
/// - `role` never changes after construction
/// - bytes leave only by copy ([`KeyMaterial::as_bytes`])
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    #[zeroize(skip)]
    role: KeyRole,
    bytes: [u8; KEY_SIZE],
}

impl KeyMaterial {
    /// Build key material from untrusted bytes
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless `bytes` is 32 bytes long.
    pub fn from_bytes(role: KeyRole, bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { role, bytes })
    }

    /// Build key material from a hex string
    pub fn from_hex(role: KeyRole, hex_str: &str) -> Result<Self> {
        let mut bytes = decode_hex(hex_str)?;
        let material = Self::from_bytes(role, &bytes);
        bytes.zeroize();
        material
    }

    /// The role of this key
    pub fn role(&self) -> KeyRole {
        self.role
    }

    /// Copy of the key bytes
    pub fn as_bytes(&self) -> [u8; KEY_SIZE] {
        self.bytes
    }

    /// Lowercase hex encoding of the key bytes
    ///
    /// ## Security Warning
    ///
    /// For private keys, only use this for secure storage.
    pub fn to_hex(&self) -> String {
        encode_hex(&self.bytes)
    }

    pub(crate) fn expose(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            KeyRole::Public => write!(f, "KeyMaterial(public, {})", self.to_hex()),
            KeyRole::Private => write!(f, "KeyMaterial(private, [REDACTED])"),
        }
    }
}

/// An X25519 public key (the recipient half)
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(KeyMaterial);

impl PublicKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        KeyMaterial::from_bytes(KeyRole::Public, bytes).map(Self)
    }

    /// Decode from a hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        KeyMaterial::from_hex(KeyRole::Public, hex_str).map(Self)
    }

    /// Copy of the key bytes
    pub fn as_bytes(&self) -> [u8; KEY_SIZE] {
        self.0.as_bytes()
    }

    /// Encode as hex string
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// The underlying role-tagged key material
    pub fn material(&self) -> &KeyMaterial {
        &self.0
    }

    /// Short identifier for logs: the first 4 bytes in hex
    pub fn fingerprint(&self) -> String {
        encode_hex(&self.0.expose()[..4])
    }

    pub(crate) fn to_x25519(&self) -> X25519PublicKey {
        X25519PublicKey::from(self.0.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PublicKey::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// An X25519 private key
///
/// ## Security
///
/// - Key bytes are zeroized when dropped
/// - `Debug` never prints the key
/// - Any 32-byte string is a usable key; X25519 clamps it at use
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(KeyMaterial);

impl PrivateKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        KeyMaterial::from_bytes(KeyRole::Private, bytes).map(Self)
    }

    /// Decode from a hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        KeyMaterial::from_hex(KeyRole::Private, hex_str).map(Self)
    }

    /// Copy of the secret key bytes
    ///
    /// ## Security Warning
    ///
    /// Only use this for secure storage. Never log or transmit these bytes.
    pub fn as_bytes(&self) -> [u8; KEY_SIZE] {
        self.0.as_bytes()
    }

    /// The underlying role-tagged key material
    pub fn material(&self) -> &KeyMaterial {
        &self.0
    }

    /// Recompute the matching public key (`X25519(k, 9)`)
    pub fn public_key(&self) -> PublicKey {
        let secret = self.to_x25519();
        let public = X25519PublicKey::from(&secret);
        PublicKey(KeyMaterial {
            role: KeyRole::Public,
            bytes: public.to_bytes(),
        })
    }

    pub(crate) fn to_x25519(&self) -> StaticSecret {
        StaticSecret::from(self.0.as_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// A public/private X25519 keypair
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    /// Public half, shared with senders
    pub public_key: PublicKey,
    /// Private half, kept by the recipient
    pub private_key: PrivateKey,
}

impl Keypair {
    /// Build a keypair from its private half
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        Self {
            public_key: private_key.public_key(),
            private_key,
        }
    }

    /// Create from raw private key bytes
    pub fn from_private_bytes(bytes: &[u8]) -> Result<Self> {
        PrivateKey::from_bytes(bytes).map(Self::from_private_key)
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
