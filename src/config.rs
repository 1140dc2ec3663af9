//! # Configuration and Facade
//!
//! [`CoreConfig`] fixes the derivation parameters once; [`SeedSeal`] carries
//! it and exposes the whole crate behind one handle.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SEEDSEAL FACADE                                │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  CoreConfig (JSON or Default)                                          │
//! │    derivation_path  "m/0'"                                             │
//! │    passphrase       optional BIP39 passphrase                          │
//! │    verbose_logging  operation summaries at INFO, else TRACE            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  SeedSeal ──► keypair_from_mnemonic ──► identity                       │
//! │           ──► encrypt / decrypt      ──► crypto                        │
//! │           ──► *_string               ──► codec                         │
//! │           ──► *_file                 ──► files                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The facade holds no mutable state, so a single instance can be shared
//! across threads.

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec;
use crate::crypto::{self, Keypair, PrivateKey, PublicKey};
use crate::error::Result;
use crate::files::{self, DecryptedFile};
use crate::identity::{self, DerivationPath};

/// Configuration for a [`SeedSeal`] instance
///
/// ```json
/// { "derivation_path": "m/0'", "passphrase": null, "verbose_logging": false }
/// ```
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Clone, Default, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Hardened path walked from the master key
    #[serde(default)]
    #[zeroize(skip)]
    pub derivation_path: DerivationPath,
    /// BIP39 passphrase (the "25th word")
    #[serde(default)]
    pub passphrase: Option<String>,
    /// Log operation summaries at INFO instead of TRACE
    #[serde(default)]
    #[zeroize(skip)]
    pub verbose_logging: bool,
}

impl CoreConfig {
    /// Parse a JSON configuration
    ///
    /// Unknown fields and malformed paths are `Error::Config`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn passphrase(&self) -> &str {
        self.passphrase.as_deref().unwrap_or("")
    }
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("derivation_path", &self.derivation_path.to_string())
            .field(
                "passphrase",
                &self.passphrase.as_ref().map(|_| "[REDACTED]"),
            )
            .field("verbose_logging", &self.verbose_logging)
            .finish()
    }
}

/// One handle over key derivation and encryption
#[derive(Debug, Clone, Default)]
pub struct SeedSeal {
    config: CoreConfig,
}

impl SeedSeal {
    /// Create with the given configuration
    pub fn new(config: CoreConfig) -> Self {
        if config.verbose_logging {
            tracing::info!(
                "seedseal v{} ready, path {}",
                crate::version(),
                config.derivation_path
            );
        }
        Self { config }
    }

    /// Create from a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        CoreConfig::from_json(json).map(Self::new)
    }

    /// The configuration in use
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Derive the keypair for `mnemonic` with the configured path and passphrase
    pub fn keypair_from_mnemonic(&self, mnemonic: &str) -> Result<Keypair> {
        let keypair = identity::generate_keypair_with_passphrase(
            mnemonic,
            self.config.passphrase(),
            Some(&self.config.derivation_path),
        )?;
        self.log_operation("keypair", 0, crypto::KEY_SIZE);
        Ok(keypair)
    }

    /// Encrypt bytes
    pub fn encrypt(&self, public_key: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>> {
        let ciphertext = crypto::encrypt(public_key, plaintext)?;
        self.log_operation("encrypt", plaintext.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// Decrypt bytes
    pub fn decrypt(&self, private_key: &PrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let plaintext = crypto::decrypt(private_key, ciphertext)?;
        self.log_operation("decrypt", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    /// Encrypt text to hex
    pub fn encrypt_string(&self, public_key: &PublicKey, text: &str) -> Result<String> {
        let hex = codec::encrypt_string(public_key, text)?;
        self.log_operation("encrypt_string", text.len(), hex.len());
        Ok(hex)
    }

    /// Decrypt hex to text
    pub fn decrypt_string(&self, private_key: &PrivateKey, hex_ciphertext: &str) -> Result<String> {
        let text = codec::decrypt_string(private_key, hex_ciphertext)?;
        self.log_operation("decrypt_string", hex_ciphertext.len(), text.len());
        Ok(text)
    }

    /// Encrypt a named file
    pub fn encrypt_file(
        &self,
        public_key: &PublicKey,
        file_name: &str,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        let ciphertext = files::encrypt_file(public_key, file_name, data)?;
        self.log_operation("encrypt_file", data.len(), ciphertext.len());
        Ok(ciphertext)
    }

    /// Decrypt a file envelope
    pub fn decrypt_file(&self, private_key: &PrivateKey, ciphertext: &[u8]) -> Result<DecryptedFile> {
        let file = files::decrypt_file(private_key, ciphertext)?;
        self.log_operation("decrypt_file", ciphertext.len(), file.data.len());
        Ok(file)
    }

    fn log_operation(&self, operation: &str, input_len: usize, output_len: usize) {
        if self.config.verbose_logging {
            tracing::info!(operation, input_len, output_len, "seedseal operation");
        } else {
            tracing::trace!(operation, input_len, output_len, "seedseal operation");
        }
    }
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
    fn test_default_config() {
        let config = CoreConfig::default();
        assert_eq!(config.derivation_path.to_string(), "m/0'");
        assert!(config.passphrase.is_none());
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_config_from_json() {
        let config = CoreConfig::from_json(
            r#"{ "derivation_path": "m/44'/0'", "passphrase": "TREZOR", "verbose_logging": true }"#,
        )
        .unwrap();
        assert_eq!(config.derivation_path.indices(), &[44, 0]);
        assert_eq!(config.passphrase.as_deref(), Some("TREZOR"));
        assert!(config.verbose_logging);

        let partial = CoreConfig::from_json("{}").unwrap();
        assert_eq!(partial.derivation_path, DerivationPath::default());
    }

    #[test]
    fn test_config_errors() {
        for bad in [
            r#"{ "derivation_path": "m/0" }"#,
            r#"{ "unknown": 1 }"#,
            r#"not json"#,
        ] {
            assert!(matches!(CoreConfig::from_json(bad), Err(Error::Config(_))));
        }
    }

    #[test]
    fn test_config_debug_redacts_passphrase() {
        let config = CoreConfig::from_json(r#"{ "passphrase": "hunter2" }"#).unwrap();
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_facade_uses_configured_passphrase() {
        let seal = SeedSeal::from_json(r#"{ "passphrase": "TREZOR" }"#).unwrap();
        let kp = seal.keypair_from_mnemonic(MNEMONIC).unwrap();
        assert_eq!(
            kp.public_key.to_hex(),
            "aa636db61b62c7c34b464d5a0f1ab6eb7019b491265d47e01ebcbcdc93c2ef1e"
        );
    }

    #[test]
    fn test_facade_uses_configured_path() {
        let seal = SeedSeal::from_json(r#"{ "derivation_path": "m/0'/1'" }"#).unwrap();
        let kp = seal.keypair_from_mnemonic(MNEMONIC).unwrap();
        assert_eq!(
            kp.public_key.to_hex(),
            "71b4701f8f201e0ae6c46fa773da84aef2f7db3958241a1825c748e5610e6479"
        );
    }

    #[test]
    fn test_facade_round_trips() {
        let mut config = CoreConfig::default();
        config.verbose_logging = true;
        let seal = SeedSeal::new(config);
        let kp = seal.keypair_from_mnemonic(MNEMONIC).unwrap();

        let ct = seal.encrypt(&kp.public_key, b"bytes").unwrap();
        assert_eq!(seal.decrypt(&kp.private_key, &ct).unwrap(), b"bytes");

        let hex = seal.encrypt_string(&kp.public_key, "text").unwrap();
        assert_eq!(seal.decrypt_string(&kp.private_key, &hex).unwrap(), "text");

        let ct = seal.encrypt_file(&kp.public_key, "a.bin", &[9, 9]).unwrap();
        let file = seal.decrypt_file(&kp.private_key, &ct).unwrap();
        assert_eq!(file.file_name, "a.bin");
        assert_eq!(file.data, vec![9, 9]);
    }

    #[test]
    fn test_facade_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeedSeal>();
    }
}
