//! AES-256-GCM authenticated encryption with a nonce-prefixed record layout:
//! `nonce || ciphertext || tag`.

use aes_gcm::{aead::Aead, Aes256Gcm, Key, KeyInit, Nonce};

use crate::{
    crypto::random,
    error::{BlockpadError, Result},
    key::CipherKey,
};

/// GCM nonce length in bytes (96 bit)
pub const NONCE_LEN: usize = 12;
/// GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Encrypts and authenticates `plaintext`, prefixing the fresh random nonce.
pub fn seal(key: &CipherKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

    let mut nonce = [0u8; NONCE_LEN];
    random::fill(&mut nonce)?;

    let cipher_text = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|err| {
            log::debug!("GCM encryption failed: {err}");
            BlockpadError::Encryption
        })?;

    let mut record = Vec::with_capacity(NONCE_LEN + cipher_text.len());
    record.extend_from_slice(&nonce);
    record.extend_from_slice(&cipher_text);
    Ok(record)
}

/// Authenticates and decrypts a record produced by [`seal`].
/// Fails with [`BlockpadError::Decryption`] on a forged or truncated record
/// or a wrong key.
pub fn open(key: &CipherKey, record: &[u8]) -> Result<Vec<u8>> {
    if record.len() < NONCE_LEN + TAG_LEN {
        return Err(BlockpadError::Format(format!(
            "record of {} bytes cannot hold a nonce and a tag",
            record.len()
        )));
    }
    let (nonce, cipher_text) = record.split_at(NONCE_LEN);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));
    cipher
        .decrypt(Nonce::from_slice(nonce), cipher_text)
        .map_err(|err| {
            log::debug!("GCM decryption failed: {err}");
            BlockpadError::Decryption
        })
}
