//! MD5 and SHA-256 digests are deterministic: hashing the same input twice
//! prints the same value.

use blockpad::primitives::hash;

fn main() {
    let input = b"abcdefghijklmnopqrstuvwxyz";

    println!("{}", hex::encode(hash::md5(input)));
    println!("{}", hex::encode(hash::md5(input)));

    println!("{}", hex::encode(hash::sha256(input)));
    println!("{}", hex::encode(hash::sha256(input)));
}
