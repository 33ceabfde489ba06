//! Fallible access to the OS entropy source.

use crate::error::{BlockpadError, Result};

/// Fills `buffer` with cryptographically secure random bytes.
/// Fails with [`BlockpadError::RandomSource`] if the OS entropy source is
/// unavailable.
pub fn fill(buffer: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buffer).map_err(|err| {
        log::debug!("OS random source failed: {err}");
        BlockpadError::RandomSource
    })
}

/// Returns `len` cryptographically secure random bytes.
pub fn random_vec(len: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; len];
    fill(&mut buffer)?;
    Ok(buffer)
}
