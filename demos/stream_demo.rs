//! AES-256-CFB stream encryption round trip.

use blockpad::{primitives::stream, random, CipherKey, BLOCK_SIZE, KEY_LEN};

fn main() {
    let key_bytes = random::random_vec(KEY_LEN).unwrap();
    let key = CipherKey::from_slice(&key_bytes).unwrap();

    let plaintext = b"Hello, friends";
    let record = stream::encrypt(&key, plaintext).unwrap();
    println!("Encrypted: {}", hex::encode(&record));
    println!("IV:        {}", hex::encode(&record[..BLOCK_SIZE]));

    let decrypted = stream::decrypt(&key, &record).unwrap();
    println!("Decrypted: {}", String::from_utf8_lossy(&decrypted));
}
