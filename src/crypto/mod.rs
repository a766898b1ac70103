//! Cryptographic operations for direnc.
//!
//! All cryptography is delegated to the `age` crate: x25519 key pairs,
//! armored streaming encryption to the public key, and streaming decryption
//! with the private key. Nothing in this module implements a primitive
//! itself.

pub mod age;
pub mod keys;

pub use self::age::{decrypt_file, encrypt_file};
pub use self::keys::{generate_key_pair, load_identity, load_recipient};
