//! RSA-OAEP public-key encryption with SHA-256 as the OAEP digest.

use rand::rngs::OsRng;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;

use crate::error::{BlockpadError, Result};

/// Generates a fresh RSA keypair of the given modulus size.
///
/// Key generation is by far the slowest operation in this crate; 2048 bit
/// takes noticeable time in debug builds.
pub fn generate_keypair(bits: usize) -> Result<(RsaPrivateKey, RsaPublicKey)> {
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|err| BlockpadError::Other(format!("RSA key generation failed: {err}")))?;
    let public_key = RsaPublicKey::from(&private_key);
    Ok((private_key, public_key))
}

/// Encrypts `message` to the holder of `private_key`'s counterpart.
/// The message must be shorter than the OAEP capacity of the modulus.
pub fn encrypt(public_key: &RsaPublicKey, message: &[u8]) -> Result<Vec<u8>> {
    let mut rng = OsRng;
    public_key
        .encrypt(&mut rng, Oaep::new::<Sha256>(), message)
        .map_err(|err| {
            log::debug!("RSA-OAEP encryption failed: {err}");
            BlockpadError::Encryption
        })
}

/// Decrypts a ciphertext produced by [`encrypt`].
pub fn decrypt(private_key: &RsaPrivateKey, cipher_text: &[u8]) -> Result<Vec<u8>> {
    private_key
        .decrypt(Oaep::new::<Sha256>(), cipher_text)
        .map_err(|err| {
            log::debug!("RSA-OAEP decryption failed: {err}");
            BlockpadError::Decryption
        })
}
