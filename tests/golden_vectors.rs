//! Fixed vectors other implementations can check against.
//!
//! `tests/fixtures/vectors.json` holds keypairs derived from one mnemonic and
//! ciphertexts produced for the `m/0'` key with a fixed ephemeral secret.
//!
//! Run with: cargo test --test golden_vectors

use seedseal::identity::RecoveryPhrase;
use seedseal::{api, codec, generate_keypair_with_passphrase, DerivationPath, PrivateKey};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Vectors {
    mnemonic: String,
    seed: String,
    keypairs: Vec<KeypairVector>,
    ciphertexts: Vec<CiphertextVector>,
}

#[derive(Debug, Deserialize)]
struct KeypairVector {
    path: String,
    passphrase: String,
    private_key: String,
    public_key: String,
}

#[derive(Debug, Deserialize)]
struct CiphertextVector {
    plaintext: String,
    ciphertext: String,
}

fn vectors() -> Vectors {
    serde_json::from_str(include_str!("fixtures/vectors.json")).unwrap()
}

#[test]
fn test_seed_vector() {
    let v = vectors();
    let phrase = RecoveryPhrase::from_phrase(&v.mnemonic).unwrap();
    assert_eq!(codec::encode_hex(phrase.to_seed().as_slice()), v.seed);
}

#[test]
fn test_keypair_vectors() {
    let v = vectors();
    for kv in &v.keypairs {
        let path: DerivationPath = kv.path.parse().unwrap();
        let kp = generate_keypair_with_passphrase(&v.mnemonic, &kv.passphrase, Some(&path))
            .unwrap();

        assert_eq!(kp.private_key.material().to_hex(), kv.private_key, "path {}", kv.path);
        assert_eq!(kp.public_key.to_hex(), kv.public_key, "path {}", kv.path);
    }
}

#[test]
fn test_keypair_vectors_through_api() {
    let v = vectors();
    let default = &v.keypairs[0];

    let raw = api::generate_keypair(&v.mnemonic, None).unwrap();
    assert_eq!(codec::encode_hex(&raw.public_key), default.public_key);
    assert_eq!(codec::encode_hex(&raw.private_key), default.private_key);
}

#[test]
fn test_ciphertext_vectors_decrypt() {
    let v = vectors();
    let private_key = PrivateKey::from_hex(&v.keypairs[0].private_key).unwrap();

    for cv in &v.ciphertexts {
        assert_eq!(
            codec::decrypt_string(&private_key, &cv.ciphertext).unwrap(),
            cv.plaintext
        );
    }
}

#[test]
fn test_ciphertext_vectors_reject_other_keys() {
    let v = vectors();
    for kv in &v.keypairs[1..] {
        let private_key = PrivateKey::from_hex(&kv.private_key).unwrap();
        for cv in &v.ciphertexts {
            assert_eq!(
                codec::decrypt_string(&private_key, &cv.ciphertext),
                Err(seedseal::Error::AuthenticationFailure)
            );
        }
    }
}
