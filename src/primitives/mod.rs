//! Self-contained helpers around standard primitives, each runnable end to
//! end by one of the demo binaries under `demos/`. None of them compose with
//! the file codec or with each other.

pub mod aead;
pub mod hash;
pub mod mac;
pub mod rsa_oaep;
pub mod stream;
