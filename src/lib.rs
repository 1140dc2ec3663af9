//! # seedseal
//!
//! Public-key authenticated encryption (ECIES over X25519) with keys derived
//! deterministically from a BIP39 mnemonic.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SEEDSEAL                                       │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                │
//! │  │     api      │   │   config     │   │    demos     │   callers      │
//! │  │ (raw bytes)  │   │  (SeedSeal)  │   │              │                │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘                │
//! │         └──────────────────┼──────────────────┘                        │
//! │                            ▼                                            │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐                │
//! │  │   identity   │   │    codec     │   │    files     │   adapters     │
//! │  │ BIP39 + path │   │ hex, strings │   │ name + data  │                │
//! │  └──────┬───────┘   └──────┬───────┘   └──────┬───────┘                │
//! │         └──────────────────┼──────────────────┘                        │
//! │                            ▼                                            │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                          crypto                                 │   │
//! │  │   keys  ──  kdf (HKDF, SLIP-0010)  ──  encryption  ──  ecies    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types and numeric codes
//! - [`crypto`] - Key material, KDFs, AES-256-GCM and the ECIES engine
//! - [`identity`] - Mnemonics, derivation paths and keypair derivation
//! - [`codec`] - Hex encoding and string encryption
//! - [`files`] - File name + contents envelope
//! - [`api`] - Raw byte boundary for hosts
//! - [`config`] - `CoreConfig` and the `SeedSeal` facade
//!
//! ## Quick Start
//!
//! ```
//! use seedseal::{codec, generate_keypair};
//!
//! let mnemonic = "digital radio analyst fine casino have mass blood potato \
//!                 hat web capital prefer debate fee differ spray cloud";
//! let keypair = generate_keypair(mnemonic, None)?;
//!
//! let hex = codec::encrypt_string(&keypair.public_key, "message")?;
//! assert_eq!(codec::decrypt_string(&keypair.private_key, &hex)?, "message");
//! # Ok::<(), seedseal::Error>(())
//! ```
//!
//! ## Security Model
//!
//! | Property | Mechanism |
//! |----------|-----------|
//! | Confidentiality | X25519 + HKDF-SHA256 + AES-256-GCM |
//! | Integrity | GCM tag checked before any plaintext is returned |
//! | Forward secrecy per message | fresh ephemeral key for every ciphertext |
//! | Secret hygiene | `zeroize` on private keys, seeds and derived keys |
//! | Logging | `tracing` events carry sizes and fingerprints only |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod api;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod files;
pub mod identity;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::{CoreConfig, SeedSeal};
pub use crypto::{decrypt, encrypt, KeyMaterial, KeyRole, Keypair, PrivateKey, PublicKey};
pub use error::{Error, Result};
pub use files::{decrypt_file, encrypt_file, DecryptedFile};
pub use identity::{
    generate_keypair, generate_keypair_with_passphrase, DerivationPath, RecoveryPhrase,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Returns the version of seedseal
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Returns build information for debugging
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        target: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        profile: if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
    }
}

/// Build information for debugging
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Crate version
    pub version: &'static str,
    /// Target operating system
    pub target: &'static str,
    /// Target architecture
    pub arch: &'static str,
    /// Build profile (debug/release)
    pub profile: &'static str,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_build_info() {
        let info = build_info();
        assert_eq!(info.version, version());
        assert!(!info.arch.is_empty());
    }
}
