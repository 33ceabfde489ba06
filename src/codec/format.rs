//! The on-disk record layout (all offsets little-endian):
//!
//! ```text
//! offset 0  : 8 bytes  — u64 original plaintext length
//! offset 8  : 16 bytes — initialization vector
//! offset 24 : N bytes  — ciphertext, N a multiple of the block size
//! ```

use crate::{
    error::{BlockpadError, Result},
    key::BLOCK_SIZE,
};

/// Size of the leading plaintext-length field in bytes
pub const LEN_FIELD_SIZE: usize = 8;
/// Size of the full header (length field + IV) in bytes
pub const HEADER_LEN: usize = LEN_FIELD_SIZE + BLOCK_SIZE;

/// The fixed-width header preceding the ciphertext: the exact original
/// plaintext length and the initialization vector the ciphertext was
/// chained from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    plaintext_len: u64,
    iv: [u8; BLOCK_SIZE],
}

impl FileHeader {
    pub fn new(plaintext_len: u64, iv: [u8; BLOCK_SIZE]) -> Self {
        Self { plaintext_len, iv }
    }

    pub fn plaintext_len(&self) -> u64 {
        self.plaintext_len
    }

    pub fn iv(&self) -> &[u8; BLOCK_SIZE] {
        &self.iv
    }

    /// Appends the serialized header to `out`.
    pub fn serialize_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.plaintext_len.to_le_bytes());
        out.extend_from_slice(&self.iv);
    }

    /// Parses a complete record, returning the header and the trailing
    /// ciphertext slice.
    ///
    /// Fails with [`BlockpadError::Format`] if the record is shorter than the
    /// header, the ciphertext is not block-aligned, or the stored length
    /// exceeds the ciphertext length.
    pub fn deserialize(record: &[u8]) -> Result<(Self, &[u8])> {
        if record.len() < HEADER_LEN {
            return Err(BlockpadError::Format(format!(
                "record of {} bytes is shorter than the {HEADER_LEN} byte header",
                record.len()
            )));
        }

        let (len_field, rest) = record.split_at(LEN_FIELD_SIZE);
        let (iv, cipher_text) = rest.split_at(BLOCK_SIZE);

        if cipher_text.len() % BLOCK_SIZE != 0 {
            return Err(BlockpadError::Format(format!(
                "ciphertext of {} bytes is not aligned to the block size {BLOCK_SIZE}",
                cipher_text.len()
            )));
        }

        // split_at yields exactly sized slices
        let mut len_bytes = [0u8; LEN_FIELD_SIZE];
        len_bytes.copy_from_slice(len_field);
        let plaintext_len = u64::from_le_bytes(len_bytes);

        let mut iv_bytes = [0u8; BLOCK_SIZE];
        iv_bytes.copy_from_slice(iv);

        if plaintext_len > cipher_text.len() as u64 {
            return Err(BlockpadError::Format(format!(
                "stored plaintext length {plaintext_len} exceeds ciphertext length {}",
                cipher_text.len()
            )));
        }

        Ok((
            Self {
                plaintext_len,
                iv: iv_bytes,
            },
            cipher_text,
        ))
    }
}
