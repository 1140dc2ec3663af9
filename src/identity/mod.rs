//! # Identity Module
//!
//! Deterministic X25519 keypairs from a BIP39 mnemonic.
//!
//! ## Derivation Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      KEYPAIR DERIVATION FLOW                            │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Step 1: Validate Mnemonic                                             │
//! │  ─────────────────────────                                              │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  12/15/18/21/24 words, English wordlist, checksum           │       │
//! │  │  (InvalidMnemonic otherwise)                                │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  Step 2: Derive Seed                                                   │
//! │  ────────────────────                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  PBKDF2-HMAC-SHA512, 2048 rounds                            │       │
//! │  │  salt = "mnemonic" + passphrase                             │       │
//! │  │  Output: 64-byte seed                                       │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  Step 3: Walk Derivation Path                                          │
//! │  ─────────────────────────────                                          │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  SLIP-0010 curve25519 master key                            │       │
//! │  │        │                                                    │       │
//! │  │        └──► hardened child per path segment (default m/0')  │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! │  Step 4: Keypair                                                       │
//! │  ─────────────────                                                      │
//! │  ┌─────────────────────────────────────────────────────────────┐       │
//! │  │  private = final key bytes (32)                             │       │
//! │  │  public  = X25519(private, 9)                               │       │
//! │  └─────────────────────────────────────────────────────────────┘       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Same mnemonic, passphrase and path always give the same keypair. The
//! mnemonic, passphrase and seed are never logged, and the seed and chain
//! codes are zeroized as soon as the key is extracted.

mod path;
mod recovery;

pub use path::{DerivationPath, DEFAULT_DERIVATION_PATH};
pub use recovery::{
    RecoveryPhrase, Seed, DEFAULT_WORD_COUNT, SEED_SIZE, SUPPORTED_WORD_COUNTS,
};

use crate::crypto::{ExtendedKey, Keypair, PrivateKey};
use crate::error::Result;

/// Derive a keypair from a mnemonic with an empty passphrase
///
/// `path` defaults to [`DEFAULT_DERIVATION_PATH`].
///
/// ## Errors
///
/// `InvalidMnemonic` for unknown words, a bad checksum or an unsupported word
/// count.
pub fn generate_keypair(mnemonic: &str, path: Option<&DerivationPath>) -> Result<Keypair> {
    generate_keypair_with_passphrase(mnemonic, "", path)
}

/// Derive a keypair from a mnemonic and BIP39 passphrase
pub fn generate_keypair_with_passphrase(
    mnemonic: &str,
    passphrase: &str,
    path: Option<&DerivationPath>,
) -> Result<Keypair> {
    let phrase = RecoveryPhrase::from_phrase(mnemonic)?;
    keypair_from_phrase(&phrase, passphrase, path)
}

/// Derive a keypair from an already validated phrase
pub fn keypair_from_phrase(
    phrase: &RecoveryPhrase,
    passphrase: &str,
    path: Option<&DerivationPath>,
) -> Result<Keypair> {
    let default_path;
    let path = match path {
        Some(path) => path,
        None => {
            default_path = DerivationPath::default();
            &default_path
        }
    };

    let seed = phrase.to_seed_with_passphrase(passphrase);
    let node = ExtendedKey::master(seed.as_slice())?.derive_path(path.indices())?;
    let private_key = PrivateKey::from_bytes(node.key_bytes())?;
    let keypair = Keypair::from_private_key(private_key);

    tracing::debug!(
        path = %path,
        words = phrase.word_count(),
        fingerprint = %keypair.public_key.fingerprint(),
        "derived keypair"
    );
    Ok(keypair)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const MNEMONIC: &str = "digital radio analyst fine casino have mass blood potato \
                            hat web capital prefer debate fee differ spray cloud";

    #[test]
    fn test_golden_keypair_default_path() {
        let kp = generate_keypair(MNEMONIC, None).unwrap();
        assert_eq!(
            kp.private_key.material().to_hex(),
            "5d11eb6fd02bd89f774bf97de0b46a6d57a913a61e0f45289a6e47a30ae1fb68"
        );
        assert_eq!(
            kp.public_key.to_hex(),
            "01842dce45100ff4209027a626a27e6317936633a5745dd410aa147e505fa665"
        );
    }

    #[test]
    fn test_explicit_default_path_matches_none() {
        let path: DerivationPath = "m/0'".parse().unwrap();
        assert_eq!(
            generate_keypair(MNEMONIC, Some(&path)).unwrap(),
            generate_keypair(MNEMONIC, None).unwrap()
        );
    }

    #[test]
    fn test_golden_keypair_other_paths() {
        let path: DerivationPath = "m/0'/1'".parse().unwrap();
        let kp = generate_keypair(MNEMONIC, Some(&path)).unwrap();
        assert_eq!(
            kp.private_key.material().to_hex(),
            "8d1a22950dd3a6d01faa0bdbe316e60ef196c8394663f262958151d3a882cfbf"
        );
        assert_eq!(
            kp.public_key.to_hex(),
            "71b4701f8f201e0ae6c46fa773da84aef2f7db3958241a1825c748e5610e6479"
        );

        let master = generate_keypair(MNEMONIC, Some(&DerivationPath::master())).unwrap();
        assert_eq!(
            master.private_key.material().to_hex(),
            "95395204b89e578e372aded51a96ca062bb56e0ca7e76c2413a54812bb669860"
        );
        assert_eq!(
            master.public_key.to_hex(),
            "0a40fa2c8e5124de47cf4d6b6be2f504c514d1c1796314f4f21c24fe6eb2a172"
        );
    }

    #[test]
    fn test_golden_keypair_with_passphrase() {
        let kp = generate_keypair_with_passphrase(MNEMONIC, "TREZOR", None).unwrap();
        assert_eq!(
            kp.private_key.material().to_hex(),
            "e178badef66766a1bab04b4281c3c837eee6b0908ac3eb8039986b55befe8de8"
        );
        assert_eq!(
            kp.public_key.to_hex(),
            "aa636db61b62c7c34b464d5a0f1ab6eb7019b491265d47e01ebcbcdc93c2ef1e"
        );
    }

    #[test]
    fn test_deterministic() {
        let phrase = RecoveryPhrase::generate(12).unwrap();
        let a = keypair_from_phrase(&phrase, "", None).unwrap();
        let b = generate_keypair(&phrase.phrase(), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_public_key_matches_private() {
        let kp = generate_keypair(MNEMONIC, None).unwrap();
        assert_eq!(kp.private_key.public_key(), kp.public_key);
    }

    #[test]
    fn test_invalid_mnemonic() {
        for bad in [
            "",
            "digital radio analyst",
            "digital radio analyst fine casino have mass blood potato \
             hat web capital prefer debate fee differ spray abandon",
            "notaword radio analyst fine casino have mass blood potato \
             hat web capital prefer debate fee differ spray cloud",
        ] {
            assert!(matches!(
                generate_keypair(bad, None),
                Err(Error::InvalidMnemonic(_))
            ));
        }
    }
}
