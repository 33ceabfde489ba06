//! AES-256-CBC block chaining over an in-memory buffer.
//!
//! The callers guarantee block alignment (the codec pads before encrypting
//! and validates before decrypting), so no padding scheme is applied here.

use cipher::{generic_array::GenericArray, BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::key::{CipherKey, BLOCK_SIZE};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypts `buffer` in place under `key` with the given IV.
/// `buffer.len()` must be a multiple of [`BLOCK_SIZE`].
pub fn encrypt_in_place(key: &CipherKey, iv: &[u8; BLOCK_SIZE], buffer: &mut [u8]) {
    debug_assert_eq!(buffer.len() % BLOCK_SIZE, 0);

    let mut mode = Aes256CbcEnc::new(key.as_array().into(), iv.into());
    for block in buffer.chunks_exact_mut(BLOCK_SIZE) {
        mode.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }
}

/// Decrypts `buffer` in place under `key` with the given IV.
/// `buffer.len()` must be a multiple of [`BLOCK_SIZE`].
pub fn decrypt_in_place(key: &CipherKey, iv: &[u8; BLOCK_SIZE], buffer: &mut [u8]) {
    debug_assert_eq!(buffer.len() % BLOCK_SIZE, 0);

    let mut mode = Aes256CbcDec::new(key.as_array().into(), iv.into());
    for block in buffer.chunks_exact_mut(BLOCK_SIZE) {
        mode.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }
}

#[cfg(test)]
mod test {
    use super::{decrypt_in_place, encrypt_in_place};
    use crate::key::{CipherKey, BLOCK_SIZE, KEY_LEN};
    use pretty_assertions::assert_eq;

    const KEY: [u8; KEY_LEN] = [0x0Fu8; KEY_LEN];
    const IV: [u8; BLOCK_SIZE] = [0xA5u8; BLOCK_SIZE];

    #[test]
    fn round_trip_multiple_blocks() {
        let key = CipherKey::from(KEY);
        let original = b"exactly thirty-two bytes long !!".to_vec();
        assert_eq!(original.len(), 2 * BLOCK_SIZE);

        let mut buffer = original.clone();
        encrypt_in_place(&key, &IV, &mut buffer);
        assert_ne!(buffer, original);

        decrypt_in_place(&key, &IV, &mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn chain_across_blocks() {
        // identical plaintext blocks must yield different ciphertext blocks
        let key = CipherKey::from(KEY);
        let mut buffer = vec![0x11u8; 2 * BLOCK_SIZE];
        encrypt_in_place(&key, &IV, &mut buffer);
        assert_ne!(buffer[..BLOCK_SIZE], buffer[BLOCK_SIZE..]);
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let key = CipherKey::from(KEY);
        let mut buffer = Vec::new();
        encrypt_in_place(&key, &IV, &mut buffer);
        assert!(buffer.is_empty());
    }
}
