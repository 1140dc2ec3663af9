//! # Cryptography Module
//!
//! All cryptographic primitives used by seedseal.
//!
//! ## Security Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CRYPTOGRAPHIC ARCHITECTURE                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    KEY HIERARCHY                                │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  Mnemonic (BIP39, 12-24 words)                                  │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │  ┌─────────────────────────────────────────────────────────┐   │   │
//! │  │  │              Seed (512 bits)                             │   │   │
//! │  │  │         Derived via PBKDF2-SHA512 (2048 rounds)         │   │   │
//! │  │  └─────────────────────────────────────────────────────────┘   │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │  ┌─────────────────────────────────────────────────────────┐   │   │
//! │  │  │   SLIP-0010 curve25519, hardened path (default m/0')    │   │   │
//! │  │  └─────────────────────────────────────────────────────────┘   │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │              X25519 Keypair (32 + 32 bytes)                     │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 ENCRYPTION SCHEME (ECIES)                       │   │
//! │  ├─────────────────────────────────────────────────────────────────┤   │
//! │  │                                                                 │   │
//! │  │  1. Key Agreement: X25519 ECDH                                 │   │
//! │  │     Ephemeral Private × Recipient Public = Shared Secret      │   │
//! │  │                                                                 │   │
//! │  │  2. Key Derivation: HKDF-SHA256                                │   │
//! │  │     Shared Secret → (AES Key, GCM Nonce)                      │   │
//! │  │                                                                 │   │
//! │  │  3. Encryption: AES-256-GCM                                    │   │
//! │  │     • 256-bit key                                              │   │
//! │  │     • 96-bit nonce (derived, one message per ephemeral key)    │   │
//! │  │     • 128-bit authentication tag                               │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Algorithm Choices
//!
//! | Algorithm | Purpose |
//! |-----------|---------|
//! | X25519 | Key agreement (RFC 7748) |
//! | HKDF-SHA256 | Envelope key and nonce (RFC 5869) |
//! | AES-256-GCM | Authenticated encryption |
//! | HMAC-SHA512 | SLIP-0010 hierarchical derivation |
//! | BIP39 | Mnemonic and seed |
//!
//! ## Security Considerations
//!
//! 1. **Key Zeroization**: secret keys, shared secrets and derived keys are zeroized when dropped
//! 2. **Constant-Time Operations**: dalek scalar multiplication, AES-GCM tag comparison
//! 3. **Secure Random**: `rand::rngs::OsRng`, only for ephemeral keys and new mnemonics
//! 4. **No Key Reuse**: each message gets its own ephemeral key, so its own AES key and nonce

mod ecies;
mod encryption;
mod kdf;
mod keys;

pub use ecies::{
    decrypt, encrypt, CiphertextParts, CIPHERTEXT_OVERHEAD, EPHEMERAL_KEY_SIZE,
    MIN_CIPHERTEXT_SIZE,
};
pub use encryption::{EncryptionKey, Nonce, NONCE_SIZE, SYMMETRIC_KEY_SIZE, TAG_SIZE};
pub use kdf::{derive_envelope_key, domain, ExtendedKey, HARDENED_OFFSET};
pub use keys::{KeyMaterial, KeyRole, Keypair, PrivateKey, PublicKey};

/// Size of X25519 public and private keys in bytes
pub const KEY_SIZE: usize = 32;
