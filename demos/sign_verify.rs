//! HMAC-SHA256 signing and verification.

use blockpad::primitives::mac;

fn main() {
    let key = b"password-1234-admin";
    let message = b"Hello Friends";

    let signature = mac::sign(key, message);
    println!("Signature: {}", hex::encode(signature));

    match mac::verify(key, message, &signature) {
        Ok(()) => println!("signature is valid"),
        Err(_) => println!("signature is not valid"),
    }

    match mac::verify(key, b"Hello Fiends", &signature) {
        Ok(()) => println!("tampered message accepted (must not happen)"),
        Err(_) => println!("tampered message rejected"),
    }
}
