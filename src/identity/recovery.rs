//! # Recovery Phrase (BIP39)
//!
//! BIP39 mnemonics: parsing, validation, generation and seed derivation.
//!
//! ## Word Counts
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BIP39 MNEMONIC LAYOUT                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  words │ entropy │ checksum │ total bits                               │
//! │  ──────┼─────────┼──────────┼───────────                                │
//! │   12   │  128    │    4     │   132                                    │
//! │   15   │  160    │    5     │   165                                    │
//! │   18   │  192    │    6     │   198                                    │
//! │   21   │  224    │    7     │   231                                    │
//! │   24   │  256    │    8     │   264                                    │
//! │                                                                         │
//! │  checksum = first (entropy_bits / 32) bits of SHA256(entropy)          │
//! │  every 11 bits index one word of the 2048-word English list            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Seed Derivation
//!
//! ```text
//! PBKDF2-HMAC-SHA512(
//!     password   = NFKD(mnemonic sentence),
//!     salt       = "mnemonic" || NFKD(passphrase),
//!     iterations = 2048,
//!     length     = 64 bytes,
//! )
//! ```
//!
//! The full 64-byte seed feeds SLIP-0010.
//!
//! ## Security Considerations
//!
//! | Aspect | Measure |
//! |--------|---------|
//! | Entropy | OS CSPRNG, 128 to 256 bits |
//! | Checksum | rejects most typos |
//! | Seed | zeroized when dropped |
//! | Display | never logged, `Debug` is redacted |

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand_core::RngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};

/// Word counts BIP39 defines
pub const SUPPORTED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Word count used by [`RecoveryPhrase::generate_default`]
pub const DEFAULT_WORD_COUNT: usize = 24;

/// Size of a BIP39 seed in bytes
pub const SEED_SIZE: usize = 64;

const MAX_SUGGESTIONS: usize = 10;

/// A BIP39 seed, wiped on drop
pub type Seed = Zeroizing<[u8; SEED_SIZE]>;

/// A validated BIP39 mnemonic
///
/// ## Security Warning
///
/// - The phrase fully determines every key derived from it
/// - Never log or persist it
pub struct RecoveryPhrase {
    mnemonic: Mnemonic,
}

impl RecoveryPhrase {
    /// Generate a new random phrase with `word_count` words
    pub fn generate(word_count: usize) -> Result<Self> {
        check_word_count(word_count)?;

        let mut entropy = [0u8; 32];
        let entropy_len = word_count / 3 * 4;
        OsRng
            .try_fill_bytes(&mut entropy[..entropy_len])
            .map_err(|e| {
                tracing::warn!("OS random source failed: {}", e);
                Error::RandomnessUnavailable
            })?;

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_len]);
        entropy.zeroize();

        Ok(Self {
            mnemonic: mnemonic?,
        })
    }

    /// Generate a 24-word phrase
    pub fn generate_default() -> Result<Self> {
        Self::generate(DEFAULT_WORD_COUNT)
    }

    /// Parse a phrase from space separated words
    ///
    /// ## Validation
    ///
    /// - 12, 15, 18, 21 or 24 words
    /// - every word in the BIP39 English wordlist
    /// - checksum must be valid
    pub fn from_phrase(phrase: &str) -> Result<Self> {
        let word_count = phrase.split_whitespace().count();
        check_word_count(word_count)?;

        let mnemonic = Mnemonic::parse_in(Language::English, phrase.to_lowercase())?;
        Ok(Self { mnemonic })
    }

    /// Parse from a list of words
    pub fn from_words(words: &[&str]) -> Result<Self> {
        Self::from_phrase(&words.join(" "))
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.mnemonic.word_count()
    }

    /// The words in order
    pub fn words(&self) -> Vec<&'static str> {
        self.mnemonic.word_iter().collect()
    }

    /// The phrase as one string (words separated by single spaces)
    ///
    /// ## Security Warning
    ///
    /// Only use this for display to the user. Never log or store.
    pub fn phrase(&self) -> String {
        self.mnemonic.to_string()
    }

    /// BIP39 seed with an empty passphrase
    pub fn to_seed(&self) -> Seed {
        self.to_seed_with_passphrase("")
    }

    /// BIP39 seed with a passphrase
    ///
    /// The same phrase with a different passphrase gives unrelated keys.
    pub fn to_seed_with_passphrase(&self, passphrase: &str) -> Seed {
        Zeroizing::new(self.mnemonic.to_seed(passphrase))
    }

    /// Validate a phrase without keeping it
    pub fn validate(phrase: &str) -> Result<()> {
        Self::from_phrase(phrase).map(|_| ())
    }

    /// Check if a single word is in the BIP39 English wordlist
    pub fn is_valid_word(word: &str) -> bool {
        Language::English
            .find_word(&word.to_lowercase())
            .is_some()
    }

    /// Wordlist entries starting with `prefix`, at most ten
    pub fn suggest_words(prefix: &str) -> Vec<&'static str> {
        if prefix.is_empty() {
            return vec![];
        }

        let prefix = prefix.to_lowercase();
        Language::English
            .word_list()
            .iter()
            .filter(|word| word.starts_with(&prefix))
            .take(MAX_SUGGESTIONS)
            .copied()
            .collect()
    }
}

impl std::fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecoveryPhrase([REDACTED])")
    }
}

fn check_word_count(word_count: usize) -> Result<()> {
    if SUPPORTED_WORD_COUNTS.contains(&word_count) {
        Ok(())
    } else {
        Err(Error::InvalidMnemonic(format!(
            "expected 12, 15, 18, 21 or 24 words, got {}",
            word_count
        )))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE_18: &str = "digital radio analyst fine casino have mass blood potato \
                             hat web capital prefer debate fee differ spray cloud";

    #[test]
    fn test_generate_each_word_count() {
        for count in SUPPORTED_WORD_COUNTS {
            let phrase = RecoveryPhrase::generate(count).unwrap();
            assert_eq!(phrase.word_count(), count);
            RecoveryPhrase::validate(&phrase.phrase()).unwrap();
        }
    }

    #[test]
    fn test_generate_rejects_unsupported_count() {
        for count in [0usize, 11, 13, 25] {
            assert!(matches!(
                RecoveryPhrase::generate(count),
                Err(Error::InvalidMnemonic(_))
            ));
        }
    }

    #[test]
    fn test_parse_valid_phrase() {
        let phrase = RecoveryPhrase::from_phrase(PHRASE_18).unwrap();
        assert_eq!(phrase.word_count(), 18);
        assert_eq!(phrase.words()[0], "digital");
    }

    #[test]
    fn test_parse_tolerates_case_and_spacing() {
        let messy = format!("  {}  ", PHRASE_18.to_uppercase().replace(' ', "   "));
        let phrase = RecoveryPhrase::from_phrase(&messy).unwrap();
        assert_eq!(phrase.phrase(), PHRASE_18.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_parse_invalid_word() {
        let invalid = PHRASE_18.replace("digital", "digitall");
        assert!(matches!(
            RecoveryPhrase::from_phrase(&invalid),
            Err(Error::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_parse_bad_checksum() {
        let swapped = PHRASE_18.replace("cloud", "abandon");
        assert!(matches!(
            RecoveryPhrase::from_phrase(&swapped),
            Err(Error::InvalidMnemonic(_))
        ));
    }

    #[test]
    fn test_parse_wrong_word_count() {
        assert!(RecoveryPhrase::from_phrase("abandon abandon abandon").is_err());
        assert!(RecoveryPhrase::from_phrase("").is_err());
    }

    #[test]
    fn test_from_words() {
        let words: Vec<&str> = PHRASE_18.split_whitespace().collect();
        let phrase = RecoveryPhrase::from_words(&words).unwrap();
        assert_eq!(phrase.words(), words);
    }

    #[test]
    fn test_seed_matches_bip39() {
        let phrase = RecoveryPhrase::from_phrase(PHRASE_18).unwrap();
        assert_eq!(
            hex::encode(phrase.to_seed().as_slice()),
            "1f6e3129b6db5e19f0f6ae6c431ba9ccab95b923963c9fd3286674dee70f125b\
             3f2ebf4537cfead8687eac6ee984f75bc57fc487840fda8ff940d82c7a3af664"
        );
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let phrase = RecoveryPhrase::from_phrase(PHRASE_18).unwrap();
        assert_ne!(*phrase.to_seed(), *phrase.to_seed_with_passphrase("secret"));
    }

    #[test]
    fn test_is_valid_word() {
        assert!(RecoveryPhrase::is_valid_word("abandon"));
        assert!(RecoveryPhrase::is_valid_word("Zoo"));
        assert!(!RecoveryPhrase::is_valid_word("notaword"));
    }

    #[test]
    fn test_suggest_words() {
        let suggestions = RecoveryPhrase::suggest_words("ab");
        assert!(suggestions.contains(&"abandon"));
        assert!(suggestions.contains(&"ability"));
        assert!(suggestions.len() <= 10);
        assert!(RecoveryPhrase::suggest_words("").is_empty());
        assert!(RecoveryPhrase::suggest_words("qqq").is_empty());
    }

    #[test]
    fn test_debug_redacts() {
        let phrase = RecoveryPhrase::from_phrase(PHRASE_18).unwrap();
        let debug = format!("{:?}", phrase);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("digital"));
    }
}
