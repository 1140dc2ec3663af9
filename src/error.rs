//! # Error Handling
//!
//! Error types for every seedseal operation.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Key Errors (100-199)                                              │
//! │  │   └── InvalidKeyLength      - Key is not 32 bytes                   │
//! │  │                                                                      │
//! │  ├── Derivation Errors (200-299)                                       │
//! │  │   ├── InvalidMnemonic       - Bad word, checksum or word count      │
//! │  │   └── InvalidDerivationPath - Path is not m/<hardened>/...          │
//! │  │                                                                      │
//! │  ├── Crypto Errors (300-399)                                           │
//! │  │   ├── RandomnessUnavailable - OS RNG failed                         │
//! │  │   ├── EncryptionFailure     - Cipher failed on valid input          │
//! │  │   ├── MalformedCiphertext   - Buffer shorter than the header        │
//! │  │   └── AuthenticationFailure - Tag mismatch / wrong key              │
//! │  │                                                                      │
//! │  ├── Codec Errors (400-499)                                            │
//! │  │   ├── InvalidEncoding       - Not an even-length hex string         │
//! │  │   ├── InvalidUtf8           - Plaintext is not UTF-8                │
//! │  │   └── InvalidFileEnvelope   - Bad file name frame                   │
//! │  │                                                                      │
//! │  └── Config Errors (500-599)                                           │
//! │      └── Config                - Unreadable configuration              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are returned synchronously and never retried internally. An
//! `AuthenticationFailure` carries no detail about which check failed.

use thiserror::Error;

/// Result type alias for seedseal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for seedseal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ========================================================================
    // Key Errors (100-199)
    // ========================================================================

    /// Key bytes do not match the curve's canonical key size
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Canonical size for the curve
        expected: usize,
        /// Size that was supplied
        actual: usize,
    },

    // ========================================================================
    // Derivation Errors (200-299)
    // ========================================================================

    /// Mnemonic failed wordlist, checksum or word-count validation
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// Derivation path could not be parsed
    #[error("Invalid derivation path: {0}")]
    InvalidDerivationPath(String),

    // ========================================================================
    // Crypto Errors (300-399)
    // ========================================================================

    /// The secure random source could not be read
    #[error("Secure randomness is unavailable")]
    RandomnessUnavailable,

    /// Internal cipher error during encryption
    #[error("Encryption failed: {0}")]
    EncryptionFailure(String),

    /// Ciphertext is shorter than the fixed header
    #[error("Malformed ciphertext")]
    MalformedCiphertext,

    /// Authentication tag did not verify
    #[error("Authentication failed")]
    AuthenticationFailure,

    // ========================================================================
    // Codec Errors (400-499)
    // ========================================================================

    /// Input is not a valid hex string
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Decrypted bytes are not valid UTF-8
    #[error("Decrypted data is not valid UTF-8")]
    InvalidUtf8,

    /// File envelope could not be built or parsed
    #[error("Invalid file envelope: {0}")]
    InvalidFileEnvelope(String),

    // ========================================================================
    // Config Errors (500-599)
    // ========================================================================

    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Get the numeric error code
    ///
    /// Error codes are organized by category:
    /// - 100-199: Keys
    /// - 200-299: Derivation
    /// - 300-399: Crypto
    /// - 400-499: Codec
    /// - 500-599: Config
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidKeyLength { .. } => 100,

            Error::InvalidMnemonic(_) => 200,
            Error::InvalidDerivationPath(_) => 201,

            Error::RandomnessUnavailable => 300,
            Error::EncryptionFailure(_) => 301,
            Error::MalformedCiphertext => 302,
            Error::AuthenticationFailure => 303,

            Error::InvalidEncoding(_) => 400,
            Error::InvalidUtf8 => 401,
            Error::InvalidFileEnvelope(_) => 402,

            Error::Config(_) => 500,
        }
    }

    /// Check if this error requires user action
    ///
    /// These come from values a person typed or chose rather than from
    /// corrupted data.
    pub fn requires_user_action(&self) -> bool {
        matches!(
            self,
            Error::InvalidMnemonic(_) | Error::InvalidDerivationPath(_) | Error::Config(_)
        )
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Error::InvalidMnemonic(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
