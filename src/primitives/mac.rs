//! HMAC-SHA256 message signing and constant-time verification.
//!
//! Unlike the block cipher, HMAC accepts keys of arbitrary length, so these
//! helpers take raw byte slices instead of a [`crate::key::CipherKey`].

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{BlockpadError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Length of the HMAC-SHA256 signature in bytes
pub const SIGNATURE_LEN: usize = 32;

fn keyed_mac(key: &[u8]) -> HmacSha256 {
    // HMAC-SHA256 accepts keys of any length
    HmacSha256::new_from_slice(key).expect("HMAC accepts any key length")
}

/// Signs `message` under the shared secret `key`.
pub fn sign(key: &[u8], message: &[u8]) -> [u8; SIGNATURE_LEN] {
    let mut mac = keyed_mac(key);
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Verifies a signature in constant time.
/// Fails with [`BlockpadError::Integrity`] on mismatch.
pub fn verify(key: &[u8], message: &[u8], signature: &[u8]) -> Result<()> {
    let mut mac = keyed_mac(key);
    mac.update(message);
    mac.verify_slice(signature)
        .map_err(|_| BlockpadError::Integrity)
}
