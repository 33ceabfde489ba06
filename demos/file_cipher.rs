//! File encryption CLI over [`blockpad::FileCodec`].
//!
//! ```text
//! cargo run --example file_cipher -- -e notes.txt          # writes notes.txt.enc
//! cargo run --example file_cipher -- -d notes.txt.enc      # writes notes.txt.enc.dec
//! ```
//!
//! Exactly one of `-e`/`-d` is required; clap prints usage and exits non-zero
//! otherwise.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use blockpad::{CipherKey, FileCodec, KEY_LEN};

fn main() {
    let args = Args::parse();

    if let Some(log_level) = args.log_level {
        simple_logger::init_with_level(log_level).unwrap();
    }

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let key = match &args.key {
        Some(hex_key) => CipherKey::from_slice(&hex::decode(hex_key)?)?,
        // the reference demo key, overridable with --key
        None => CipherKey::from([b'i'; KEY_LEN]),
    };

    let codec = if args.tagged {
        FileCodec::with_integrity(key)
    } else {
        FileCodec::new(key)
    };

    let output = args.output.as_deref();
    if args.encrypt {
        let written = codec.encrypt_file(&args.file, output)?;
        println!("Encrypted output file: {}", written.display());
    } else {
        let written = codec.decrypt_file(&args.file, output)?;
        println!("Decrypted output file: {}", written.display());
    }

    Ok(())
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["encrypt", "decrypt"])))]
struct Args {
    /// encrypt FILE, writing FILE.enc unless --output is given
    #[arg(short, long)]
    encrypt: bool,
    /// decrypt FILE, writing FILE.dec unless --output is given
    #[arg(short, long)]
    decrypt: bool,
    /// the input file
    file: PathBuf,
    /// explicit output path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// 64 hex character (32 byte) key; defaults to the demo constant
    #[arg(short, long)]
    key: Option<String>,
    /// append and verify an HMAC-SHA256 integrity trailer
    #[arg(short, long)]
    tagged: bool,
    #[arg(short, long)]
    log_level: Option<log::Level>,
}
