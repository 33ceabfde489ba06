//! One-shot cryptographic digests.
//!
//! MD5 is kept for fingerprinting and interop only, it is broken for any
//! security purpose.

use md5::Md5;
use sha2::{Digest, Sha256};

/// SHA-256 digest length in bytes
pub const SHA256_LEN: usize = 32;
/// MD5 digest length in bytes
pub const MD5_LEN: usize = 16;

pub fn sha256(data: &[u8]) -> [u8; SHA256_LEN] {
    Sha256::digest(data).into()
}

pub fn md5(data: &[u8]) -> [u8; MD5_LEN] {
    Md5::digest(data).into()
}
