use crate::key::KEY_LEN;

/// Represents either success(T) or a failure ([`BlockpadError`])
pub type Result<T> = std::result::Result<T, BlockpadError>;

/// Represents an error which has occurred in the blockpad library
#[derive(Debug, thiserror::Error)]
pub enum BlockpadError {
    /// reading the input or writing the output failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// the supplied key does not have the cipher's required length
    #[error("key must be {KEY_LEN} bytes, got {0}")]
    KeyLength(usize),

    /// the encrypted input is too short or not block-aligned
    #[error("malformed encrypted input: {0}")]
    Format(String),

    /// the OS entropy source could not provide random bytes
    #[error("secure random source unavailable")]
    RandomSource,

    /// the integrity trailer did not match the record
    #[error("integrity tag verification failed")]
    Integrity,

    /// a primitive failed to encrypt
    #[error("failed to encrypt")]
    Encryption,

    /// a primitive failed to decrypt or authenticate
    #[error("failed to decrypt")]
    Decryption,

    /// any arbitrary error
    #[error("{0}")]
    Other(String),
}
