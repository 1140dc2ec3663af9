//! # Encryption Demo
//!
//! Encrypts bytes, text and a named file to a mnemonic-derived public key.
//!
//! ## Run
//!
//! ```bash
//! RUST_LOG=seedseal=debug cargo run --example encryption_demo
//! ```

use seedseal::crypto::MIN_CIPHERTEXT_SIZE;
use seedseal::{codec, CoreConfig, SeedSeal};
use tracing_subscriber::EnvFilter;

const MNEMONIC: &str = "digital radio analyst fine casino have mass blood potato \
                        hat web capital prefer debate fee differ spray cloud";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== seedseal: ECIES Encryption Demo ===\n");

    // Step 1: Set up the facade
    println!("Step 1: Loading configuration...");
    let config = CoreConfig::from_json(r#"{ "derivation_path": "m/0'", "verbose_logging": true }"#)
        .expect("valid configuration");
    println!("  {:?}", config);
    let seal = SeedSeal::new(config);
    let bob = seal
        .keypair_from_mnemonic(MNEMONIC)
        .expect("derivation failed");
    println!("  Bob's public key: {}", bob.public_key.to_hex());
    println!();

    // Step 2: Wire format
    println!("Step 2: Ciphertext layout");
    println!();
    println!("  ┌─────────────────────────────────────────────────────────────┐");
    println!("  │                    WIRE FORMAT                              │");
    println!("  ├─────────────────────────────────────────────────────────────┤");
    println!("  │                                                             │");
    println!("  │  ┌──────────────┬────────────────────┬──────────────┐      │");
    println!("  │  │ eph_pk (32)  │ body (len of text) │  tag (16)    │      │");
    println!("  │  └──────────────┴────────────────────┴──────────────┘      │");
    println!("  │                                                             │");
    println!("  │  nonce: derived by HKDF, never transmitted                 │");
    println!("  │                                                             │");
    println!("  └─────────────────────────────────────────────────────────────┘");
    println!();

    // Step 3: Encrypt the same message twice
    println!("Step 3: Alice encrypts \"message\" twice...");
    let first = seal
        .encrypt_string(&bob.public_key, "message")
        .expect("encryption failed");
    let second = seal
        .encrypt_string(&bob.public_key, "message")
        .expect("encryption failed");
    println!("  #1 {}", first);
    println!("  #2 {}", second);
    println!(
        "  Different ciphertexts: {} (fresh ephemeral key each time)",
        first != second
    );
    println!();

    // Step 4: Bob decrypts
    println!("Step 4: Bob decrypts both...");
    for hex in [&first, &second] {
        let text = seal
            .decrypt_string(&bob.private_key, hex)
            .expect("decryption failed");
        println!("  [OK] {:?}", text);
    }
    println!();

    // Step 5: Tampering
    println!("Step 5: Flipping one bit of the ciphertext...");
    let mut bytes = codec::decode_hex(&first).expect("valid hex");
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    match seal.decrypt(&bob.private_key, &bytes) {
        Ok(_) => println!("  [UNEXPECTED] tampered ciphertext accepted"),
        Err(e) => println!("  [OK] rejected: {}", e),
    }
    match seal.decrypt(&bob.private_key, &bytes[..MIN_CIPHERTEXT_SIZE - 1]) {
        Ok(_) => println!("  [UNEXPECTED] short ciphertext accepted"),
        Err(e) => println!("  [OK] short buffer: {}", e),
    }
    match seal.decrypt_string(&bob.private_key, "zz") {
        Ok(_) => println!("  [UNEXPECTED] bad hex accepted"),
        Err(e) => println!("  [OK] bad hex: {}", e),
    }
    println!();

    // Step 6: File envelope
    println!("Step 6: Encrypting a named file...");
    let contents = b"name,amount\nalice,10\nbob,20\n";
    let envelope = seal
        .encrypt_file(&bob.public_key, "ledger.csv", contents)
        .expect("encryption failed");
    println!("  {} bytes in, {} bytes out", contents.len(), envelope.len());
    let file = seal
        .decrypt_file(&bob.private_key, &envelope)
        .expect("decryption failed");
    println!("  [OK] recovered {:?}, {} bytes", file.file_name, file.data.len());

    println!("\n=== Demo Complete ===");
}
