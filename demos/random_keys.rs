//! Secure random key material from the OS entropy source.

use blockpad::random;

fn main() {
    for bits in [128, 192, 256, 512] {
        let key = random::random_vec(bits / 8).unwrap();
        println!("{bits:>3} bit key: {}", hex::encode(key));
    }
}
