//! # blockpad
//! File-level block-cipher encryption with a length-prefixed, randomly padded
//! on-disk format, built on the pure Rust [RustCrypto](https://github.com/RustCrypto)
//! crates.
//!
//! The core type is [`codec::FileCodec`], which encrypts a file with
//! AES-256-CBC and writes the result as
//!
//! ```text
//! offset 0    : 8 bytes  — u64 (little-endian) original plaintext length
//! offset 8    : 16 bytes — initialization vector
//! offset 24   : N bytes  — ciphertext, N a multiple of the block size
//! ```
//!
//! The plaintext is right-padded with random bytes up to the next block
//! boundary before encryption; the stored length is the only thing that
//! delimits real data from padding. [`codec::FileCodec::with_integrity`]
//! additionally appends an HMAC-SHA256 trailer over the whole record and
//! verifies it before decrypting.
//!
//! The [`primitives`] module collects small, self-contained helpers around
//! other standard primitives (AES-GCM, AES-CFB, HMAC signing, RSA-OAEP,
//! hashing), each a thin wrapper that the demo binaries under `demos/` run
//! end to end.

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod crypto;

/// the padded file codec and its on-disk format
pub mod codec;
/// error definitions
pub mod error;
/// fixed-size cipher key with length validation
pub mod key;
/// standalone primitive helpers (AEAD, stream cipher, MAC, hashing, RSA-OAEP)
pub mod primitives;

pub use codec::FileCodec;
pub use crypto::random;
pub use key::{CipherKey, BLOCK_SIZE, KEY_LEN};
