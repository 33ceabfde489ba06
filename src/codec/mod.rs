//! Bidirectional transformation between a plaintext file and its encrypted
//! on-disk representation.

pub mod format;

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    crypto::{cbc, integrity, random},
    error::{BlockpadError, Result},
    key::{CipherKey, BLOCK_SIZE},
};
use format::{FileHeader, HEADER_LEN};

/// Suffix appended to the input path when no encryption output path is given
pub const ENCRYPTED_SUFFIX: &str = "enc";
/// Suffix appended to the input path when no decryption output path is given
pub const DECRYPTED_SUFFIX: &str = "dec";

/// Encrypts whole files with AES-256-CBC into a length-prefixed record
/// (see [`format`]), padding the plaintext with random bytes up to the next
/// block boundary. The decrypt path restores the exact original byte length.
///
/// The baseline codec carries no integrity protection: decrypting with the
/// wrong key silently produces garbage of the stored length, as chained block
/// modes have no built-in authentication. [`FileCodec::with_integrity`] opts
/// into an HMAC-SHA256 trailer over the whole record, verified before
/// decryption.
#[derive(Clone, Copy, Debug)]
pub struct FileCodec {
    key: CipherKey,
    integrity: bool,
}

impl FileCodec {
    /// Creates a codec producing the baseline, unauthenticated record format.
    pub fn new(key: CipherKey) -> Self {
        Self {
            key,
            integrity: false,
        }
    }

    /// Creates a codec which appends an HMAC-SHA256 trailer on encryption and
    /// requires it to verify on decryption.
    pub fn with_integrity(key: CipherKey) -> Self {
        Self {
            key,
            integrity: true,
        }
    }

    /// Encrypts `plaintext` into a complete in-memory record.
    /// May fail with [`BlockpadError::RandomSource`].
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padding = padding_len(plaintext.len());
        log::trace!(
            "sealing {} plaintext bytes with {padding} padding bytes",
            plaintext.len()
        );

        let mut iv = [0u8; BLOCK_SIZE];
        random::fill(&mut iv)?;

        let mut record = Vec::with_capacity(HEADER_LEN + plaintext.len() + padding);
        FileHeader::new(plaintext.len() as u64, iv).serialize_into(&mut record);
        record.extend_from_slice(plaintext);
        if padding > 0 {
            let start = record.len();
            record.resize(start + padding, 0);
            random::fill(&mut record[start..])?;
        }

        cbc::encrypt_in_place(&self.key, &iv, &mut record[HEADER_LEN..]);

        if self.integrity {
            let tag = integrity::compute_tag(&self.key, &record);
            record.extend_from_slice(&tag);
        }

        Ok(record)
    }

    /// Decrypts a complete in-memory record back to the original plaintext.
    /// May fail with [`BlockpadError::Format`] on a malformed record and,
    /// for an integrity-enabled codec, with [`BlockpadError::Integrity`].
    pub fn open(&self, record: &[u8]) -> Result<Vec<u8>> {
        let record = if self.integrity {
            let body_len = record.len().checked_sub(integrity::TAG_LEN).ok_or_else(|| {
                BlockpadError::Format(format!(
                    "record of {} bytes is shorter than the integrity trailer",
                    record.len()
                ))
            })?;
            let (body, tag) = record.split_at(body_len);
            integrity::verify_tag(&self.key, body, tag)?;
            body
        } else {
            record
        };

        let (header, cipher_text) = FileHeader::deserialize(record)?;
        log::trace!(
            "opening record with {} ciphertext bytes, stored length {}",
            cipher_text.len(),
            header.plaintext_len()
        );

        let mut plaintext = cipher_text.to_vec();
        cbc::decrypt_in_place(&self.key, header.iv(), &mut plaintext);
        // deserialize enforces plaintext_len <= ciphertext len, the cast is lossless
        plaintext.truncate(header.plaintext_len() as usize);

        Ok(plaintext)
    }

    /// Encrypts the file at `input` and writes the record to `output`,
    /// defaulting to `<input>.enc`. Returns the path written to.
    /// The input file is never modified; an existing output is overwritten.
    pub fn encrypt_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let output = resolve_output(input, output, ENCRYPTED_SUFFIX);
        log::debug!("encrypting {} into {}", input.display(), output.display());

        let plaintext = fs::read(input)?;
        let record = self.seal(&plaintext)?;
        fs::write(&output, record)?;

        Ok(output)
    }

    /// Decrypts the record file at `input` and writes the plaintext to
    /// `output`, defaulting to `<input>.dec`. Returns the path written to.
    pub fn decrypt_file(&self, input: &Path, output: Option<&Path>) -> Result<PathBuf> {
        let output = resolve_output(input, output, DECRYPTED_SUFFIX);
        log::debug!("decrypting {} into {}", input.display(), output.display());

        let record = fs::read(input)?;
        let plaintext = self.open(&record)?;
        fs::write(&output, plaintext)?;

        Ok(output)
    }
}

fn padding_len(plaintext_len: usize) -> usize {
    (BLOCK_SIZE - plaintext_len % BLOCK_SIZE) % BLOCK_SIZE
}

fn resolve_output(input: &Path, output: Option<&Path>, suffix: &str) -> PathBuf {
    output.map_or_else(
        || {
            let mut path = OsString::from(input.as_os_str());
            path.push(".");
            path.push(suffix);
            PathBuf::from(path)
        },
        Path::to_path_buf,
    )
}
