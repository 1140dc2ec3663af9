//! # Keypair Demo
//!
//! Derives X25519 keypairs from a BIP39 mnemonic along a few paths.
//!
//! ## Run
//!
//! ```bash
//! RUST_LOG=seedseal=debug cargo run --example keypair_demo
//! ```

use seedseal::identity::{self, DerivationPath, RecoveryPhrase, SUPPORTED_WORD_COUNTS};
use tracing_subscriber::EnvFilter;

const MNEMONIC: &str = "digital radio analyst fine casino have mass blood potato \
                        hat web capital prefer debate fee differ spray cloud";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== seedseal: Keypair Derivation Demo ===\n");

    // Step 1: The derivation chain
    println!("Step 1: How a keypair is derived");
    println!();
    println!("  ┌─────────────────────────────────────────────────────────────┐");
    println!("  │                    DERIVATION CHAIN                         │");
    println!("  ├─────────────────────────────────────────────────────────────┤");
    println!("  │                                                             │");
    println!("  │  mnemonic ──► PBKDF2-SHA512 ──► 64-byte seed               │");
    println!("  │                                    │                        │");
    println!("  │                                    ▼                        │");
    println!("  │           SLIP-0010 curve25519 master ──► m/0' ──► ...     │");
    println!("  │                                    │                        │");
    println!("  │                                    ▼                        │");
    println!("  │           private key k   ──►   public key X25519(k, 9)    │");
    println!("  │                                                             │");
    println!("  └─────────────────────────────────────────────────────────────┘");
    println!();

    // Step 2: Validate the mnemonic
    println!("Step 2: Validating the mnemonic...");
    match RecoveryPhrase::validate(MNEMONIC) {
        Ok(()) => println!("  [OK] 18 words, checksum verified"),
        Err(e) => println!("  [FAILED] {}", e),
    }
    println!();

    // Step 3: Derive along several paths
    println!("Step 3: Deriving keypairs...");
    for path in ["m/0'", "m/0'/1'", "m"] {
        let parsed: DerivationPath = path.parse().expect("valid path");
        let keypair =
            identity::generate_keypair(MNEMONIC, Some(&parsed)).expect("derivation failed");
        println!("  {:8} public {}", path, keypair.public_key.to_hex());
    }
    println!();

    // Step 4: Determinism
    println!("Step 4: Deriving the default path twice...");
    let first = identity::generate_keypair(MNEMONIC, None).expect("derivation failed");
    let second = identity::generate_keypair(MNEMONIC, None).expect("derivation failed");
    if first == second {
        println!("  [OK] identical keypairs");
    } else {
        println!("  [FAILED] keypairs differ");
    }
    println!("  Debug output never shows the private key: {:?}", first.private_key);
    println!();

    // Step 5: Passphrase
    println!("Step 5: Same words, passphrase \"TREZOR\"...");
    let with_pass = identity::generate_keypair_with_passphrase(MNEMONIC, "TREZOR", None)
        .expect("derivation failed");
    println!("  public {}", with_pass.public_key.to_hex());
    println!();

    // Step 6: Fresh mnemonics
    println!("Step 6: Generating fresh mnemonics...");
    for count in SUPPORTED_WORD_COUNTS {
        let phrase = RecoveryPhrase::generate(count).expect("generation failed");
        let keypair = identity::keypair_from_phrase(&phrase, "", None).expect("derivation failed");
        println!(
            "  {:2} words ──► fingerprint {}",
            phrase.word_count(),
            keypair.public_key.fingerprint()
        );
    }
    println!();

    // Step 7: Invalid input
    println!("Step 7: Rejecting bad input...");
    let bad_words = MNEMONIC.replace("cloud", "abandon");
    for (label, result) in [
        ("bad checksum", identity::generate_keypair(&bad_words, None)),
        ("too few words", identity::generate_keypair("digital radio", None)),
    ] {
        match result {
            Ok(_) => println!("  [UNEXPECTED] {} accepted", label),
            Err(e) => println!("  [OK] {}: {} (code {})", label, e, e.code()),
        }
    }
    match "m/0".parse::<DerivationPath>() {
        Ok(_) => println!("  [UNEXPECTED] non-hardened path accepted"),
        Err(e) => println!("  [OK] non-hardened path: {}", e),
    }

    println!("\n=== Demo Complete ===");
}
