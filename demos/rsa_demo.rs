//! RSA-OAEP public-key encryption round trip.

use blockpad::primitives::rsa_oaep;

fn main() {
    println!("Generating a 2048 bit RSA keypair, this may take a moment...");
    let (private_key, public_key) = rsa_oaep::generate_keypair(2048).unwrap();

    let message = b"Hello, Friends";
    let cipher_text = rsa_oaep::encrypt(&public_key, message).unwrap();
    println!("Encrypted: {}", hex::encode(&cipher_text));

    let decrypted = rsa_oaep::decrypt(&private_key, &cipher_text).unwrap();
    println!("Decrypted: {}", String::from_utf8_lossy(&decrypted));
}
