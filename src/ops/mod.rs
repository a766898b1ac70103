//! High-level operations for direnc.
//!
//! This module provides the user-facing operations: generating the key
//! pair, and bulk-encrypting or bulk-decrypting every directory pair found
//! under a root.

pub mod bulk;
pub mod keygen;

// Re-export commonly used functions
pub use bulk::{decrypt_all, encrypt_all, process_pair, Cipher};
pub use keygen::generate_key;
