//! AES-256-GCM authenticated encryption round trip.

use blockpad::{primitives::aead, random, CipherKey, KEY_LEN};

fn main() {
    let key_bytes = random::random_vec(KEY_LEN).unwrap();
    let key = CipherKey::from_slice(&key_bytes).unwrap();
    println!("Encryption key: {}", hex::encode(&key_bytes));

    let message = b"Message for AES-256-GCM encryption";
    let record = aead::seal(&key, message).unwrap();
    println!("Nonce:      {}", hex::encode(&record[..aead::NONCE_LEN]));
    println!("Ciphertext: {}", hex::encode(&record[aead::NONCE_LEN..]));

    let decrypted = aead::open(&key, &record).unwrap();
    println!("Decrypted:  {}", String::from_utf8_lossy(&decrypted));

    // any bit flip makes authentication fail
    let mut forged = record;
    forged[aead::NONCE_LEN] ^= 0x01;
    println!("Tampered record rejected: {}", aead::open(&key, &forged).is_err());
}
