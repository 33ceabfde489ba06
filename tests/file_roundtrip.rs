use std::{fs, path::PathBuf};

use pretty_assertions::assert_eq;
use rand::{thread_rng, Rng};

use blockpad::{error::BlockpadError, CipherKey, FileCodec, BLOCK_SIZE, KEY_LEN};

const HEADER_LEN: usize = 8 + BLOCK_SIZE;

fn test_key() -> CipherKey {
    CipherKey::from([b'i'; KEY_LEN])
}

fn write_input(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn roundtrip_file(plaintext: &[u8]) {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "input.bin", plaintext);
    let codec = FileCodec::new(test_key());

    let encrypted = codec.encrypt_file(&input, None).unwrap();
    let decrypted = codec.decrypt_file(&encrypted, None).unwrap();

    assert_eq!(fs::read(decrypted).unwrap(), plaintext);
    // the input is left untouched
    assert_eq!(fs::read(input).unwrap(), plaintext);
}

#[test]
fn roundtrip_empty_file() {
    roundtrip_file(&[]);
}

#[test]
fn roundtrip_sub_block_file() {
    roundtrip_file(b"Hello, friends");
}

#[test]
fn roundtrip_block_aligned_file() {
    roundtrip_file(&[0xEEu8; 4 * BLOCK_SIZE]);
}

#[test]
fn roundtrip_large_random_file() {
    let mut plaintext = vec![0u8; 100_000];
    thread_rng().fill(plaintext.as_mut_slice());
    roundtrip_file(&plaintext);
}

#[test]
fn default_suffixes_are_appended() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "notes.txt", b"some notes");
    let codec = FileCodec::new(test_key());

    let encrypted = codec.encrypt_file(&input, None).unwrap();
    assert_eq!(encrypted, dir.path().join("notes.txt.enc"));

    let decrypted = codec.decrypt_file(&encrypted, None).unwrap();
    assert_eq!(decrypted, dir.path().join("notes.txt.enc.dec"));
}

#[test]
fn explicit_output_paths_are_used() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "notes.txt", b"some notes");
    let codec = FileCodec::new(test_key());

    let enc_out = dir.path().join("cipher.bin");
    let encrypted = codec.encrypt_file(&input, Some(&enc_out)).unwrap();
    assert_eq!(encrypted, enc_out);

    let dec_out = dir.path().join("plain.bin");
    let decrypted = codec.decrypt_file(&encrypted, Some(&dec_out)).unwrap();
    assert_eq!(decrypted, dec_out);
    assert_eq!(fs::read(dec_out).unwrap(), b"some notes");
}

#[test]
fn encrypted_file_has_header_and_aligned_ciphertext() {
    let dir = tempfile::tempdir().unwrap();
    let plaintext = b"Hello, friends"; // 14 bytes, pads to one block
    let input = write_input(&dir, "input.bin", plaintext);

    let encrypted = FileCodec::new(test_key()).encrypt_file(&input, None).unwrap();
    let record = fs::read(encrypted).unwrap();

    // 8 byte length + 16 byte IV + one padded block
    assert_eq!(record.len(), 40);
    let stored_len = u64::from_le_bytes(record[..8].try_into().unwrap());
    assert_eq!(stored_len, plaintext.len() as u64);
    assert_eq!((record.len() - HEADER_LEN) % BLOCK_SIZE, 0);
}

#[test]
fn two_encryptions_differ_in_iv_and_ciphertext() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "input.bin", b"Hello, friends");
    let codec = FileCodec::new(test_key());

    let first_path = dir.path().join("first.enc");
    let second_path = dir.path().join("second.enc");
    codec.encrypt_file(&input, Some(&first_path)).unwrap();
    codec.encrypt_file(&input, Some(&second_path)).unwrap();

    let first = fs::read(first_path).unwrap();
    let second = fs::read(second_path).unwrap();
    assert_eq!(first[..8], second[..8]);
    assert_ne!(first[8..HEADER_LEN], second[8..HEADER_LEN]);
    assert_ne!(first[HEADER_LEN..], second[HEADER_LEN..]);
}

#[test]
fn key_length_is_enforced() {
    for len in [31, 33] {
        let result = CipherKey::from_slice(&vec![0u8; len]);
        assert!(matches!(result, Err(BlockpadError::KeyLength(l)) if l == len));
    }
}

#[test]
fn decrypt_rejects_file_shorter_than_header() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "short.enc", &[0u8; HEADER_LEN - 1]);

    let result = FileCodec::new(test_key()).decrypt_file(&input, None);
    assert!(matches!(result, Err(BlockpadError::Format(_))));
}

#[test]
fn decrypt_rejects_misaligned_ciphertext() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "skewed.enc", &[0u8; HEADER_LEN + BLOCK_SIZE + 1]);

    let result = FileCodec::new(test_key()).decrypt_file(&input, None);
    assert!(matches!(result, Err(BlockpadError::Format(_))));
}

#[test]
fn decrypt_with_wrong_key_yields_garbage_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "input.bin", b"Hello, friends");

    let encrypted = FileCodec::new(test_key()).encrypt_file(&input, None).unwrap();

    let wrong = FileCodec::new(CipherKey::from([b'j'; KEY_LEN]));
    let decrypted = wrong.decrypt_file(&encrypted, None).unwrap();

    let garbage = fs::read(decrypted).unwrap();
    assert_eq!(garbage.len(), 14);
    assert_ne!(garbage.as_slice(), b"Hello, friends");
}

#[test]
fn missing_input_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    let result = FileCodec::new(test_key()).encrypt_file(&missing, None);
    assert!(matches!(result, Err(BlockpadError::Io(_))));
}

#[test]
fn tagged_files_roundtrip_and_reject_tampering() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "input.bin", b"Hello, friends");
    let codec = FileCodec::with_integrity(test_key());

    let encrypted = codec.encrypt_file(&input, None).unwrap();
    let decrypted = codec.decrypt_file(&encrypted, None).unwrap();
    assert_eq!(fs::read(decrypted).unwrap(), b"Hello, friends");

    let mut record = fs::read(&encrypted).unwrap();
    record[HEADER_LEN] ^= 0x01;
    fs::write(&encrypted, record).unwrap();

    let result = codec.decrypt_file(&encrypted, None);
    assert!(matches!(result, Err(BlockpadError::Integrity)));
}

#[test]
fn baseline_records_stay_compatible_with_untagged_readers() {
    // a tagged record is a baseline record plus a 32 byte trailer; the
    // baseline codec must keep reading untagged files written earlier
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(&dir, "input.bin", b"Hello, friends");

    let encrypted = FileCodec::new(test_key()).encrypt_file(&input, None).unwrap();
    let record = fs::read(&encrypted).unwrap();
    assert_eq!(record.len(), 40);

    let reread = FileCodec::new(test_key()).decrypt_file(&encrypted, None).unwrap();
    assert_eq!(fs::read(reread).unwrap(), b"Hello, friends");
}
