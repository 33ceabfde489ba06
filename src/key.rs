use crate::error::{BlockpadError, Result};

/// Key length of the underlying cipher (AES-256) in bytes
pub const KEY_LEN: usize = 32;
/// Block size of the underlying cipher (AES) in bytes
pub const BLOCK_SIZE: usize = 16;

/// A validated, fixed-length secret key for the block cipher.
///
/// Construction fails with [`BlockpadError::KeyLength`] unless the input is
/// exactly [`KEY_LEN`] bytes, so every function taking a [`CipherKey`] can
/// rely on the length invariant.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CipherKey([u8; KEY_LEN]);

impl CipherKey {
    /// Tries to build a key from arbitrary byte material.
    pub fn from_slice(material: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = material
            .try_into()
            .map_err(|_| BlockpadError::KeyLength(material.len()))?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn as_array(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for CipherKey {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for CipherKey {
    type Error = BlockpadError;

    fn try_from(material: &[u8]) -> Result<Self> {
        Self::from_slice(material)
    }
}

// Keys routinely end up in debug output of the structs holding them,
// so never print the raw bytes.
impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CipherKey([REDACTED; {KEY_LEN}])")
    }
}
