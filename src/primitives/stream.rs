//! AES-256-CFB stream encryption with an IV-prefixed record layout:
//! `iv || ciphertext`. CFB needs no padding, the ciphertext has the exact
//! plaintext length. Unauthenticated, like the CBC file codec.

use cipher::{generic_array::GenericArray, AsyncStreamCipher, KeyIvInit};

use crate::{
    crypto::random,
    error::{BlockpadError, Result},
    key::{CipherKey, BLOCK_SIZE},
};

type Aes256CfbEnc = cfb_mode::Encryptor<aes::Aes256>;
type Aes256CfbDec = cfb_mode::Decryptor<aes::Aes256>;

/// Encrypts `plaintext`, prefixing the fresh random IV.
pub fn encrypt(key: &CipherKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut iv = [0u8; BLOCK_SIZE];
    random::fill(&mut iv)?;

    let mut record = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
    record.extend_from_slice(&iv);
    record.extend_from_slice(plaintext);

    Aes256CfbEnc::new(key.as_array().into(), &iv.into()).encrypt(&mut record[BLOCK_SIZE..]);
    Ok(record)
}

/// Decrypts a record produced by [`encrypt`].
/// Fails with [`BlockpadError::Format`] if the record cannot hold an IV.
pub fn decrypt(key: &CipherKey, record: &[u8]) -> Result<Vec<u8>> {
    if record.len() < BLOCK_SIZE {
        return Err(BlockpadError::Format(format!(
            "record of {} bytes is shorter than the {BLOCK_SIZE} byte IV",
            record.len()
        )));
    }
    let (iv, cipher_text) = record.split_at(BLOCK_SIZE);

    let mut plaintext = cipher_text.to_vec();
    Aes256CfbDec::new(key.as_array().into(), GenericArray::from_slice(iv)).decrypt(&mut plaintext);
    Ok(plaintext)
}
