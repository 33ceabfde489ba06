//! HMAC-SHA256 trailer for authenticated file records.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{
    error::{BlockpadError, Result},
    key::CipherKey,
};

type HmacSha256 = Hmac<Sha256>;

/// Length of the integrity trailer in bytes
pub const TAG_LEN: usize = 32;

fn keyed_mac(key: &CipherKey) -> HmacSha256 {
    // HMAC-SHA256 accepts keys of any length
    HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length")
}

/// Computes the trailer tag over a complete record (header + IV + ciphertext).
pub fn compute_tag(key: &CipherKey, record: &[u8]) -> [u8; TAG_LEN] {
    let mut mac = keyed_mac(key);
    mac.update(record);
    mac.finalize().into_bytes().into()
}

/// Verifies a trailer tag in constant time.
/// Fails with [`BlockpadError::Integrity`] on mismatch.
pub fn verify_tag(key: &CipherKey, record: &[u8], tag: &[u8]) -> Result<()> {
    let mut mac = keyed_mac(key);
    mac.update(record);
    mac.verify_slice(tag).map_err(|_| {
        log::debug!("integrity tag mismatch for record of {} bytes", record.len());
        BlockpadError::Integrity
    })
}
