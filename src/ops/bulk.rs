//! Bulk cipher runner over directory pairs.
//!
//! For each discovered pair, every file under the operation's source side is
//! transformed into the destination side with the relative sub-path mirrored
//! exactly. Files are always (re-)processed; there is no skip-if-unchanged
//! logic. A failure on any single file propagates immediately and aborts the
//! remaining batch.

use crate::config::KeyPaths;
use crate::crypto;
use crate::errors::{AppError, AppResult};
use crate::pairing::{find_directory_pairs, DirectoryPair};
use age::x25519::{Identity, Recipient};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// The cipher direction together with the key material it needs.
///
/// Encryption reads the plaintext side and needs only the public key;
/// decryption reads the encrypted side and needs only the private key.
pub enum Cipher {
    /// Encrypt plain -> encrypted with the recipient.
    Encrypt(Recipient),
    /// Decrypt encrypted -> plain with the identity.
    Decrypt(Identity),
}

impl Cipher {
    /// Progress label shown to the user for each file.
    fn label(&self) -> &'static str {
        match self {
            Cipher::Encrypt(_) => "Encrypting",
            Cipher::Decrypt(_) => "Decrypting",
        }
    }

    /// The (source, destination) sides of a pair for this direction.
    fn endpoints<'a>(&self, pair: &'a DirectoryPair) -> (&'a Path, &'a Path) {
        match self {
            Cipher::Encrypt(_) => (&pair.plain, &pair.encrypted),
            Cipher::Decrypt(_) => (&pair.encrypted, &pair.plain),
        }
    }

    /// Runs the primitive on a single file.
    fn run(&self, input: &Path, output: &Path) -> AppResult<()> {
        match self {
            Cipher::Encrypt(recipient) => crypto::encrypt_file(input, output, recipient),
            Cipher::Decrypt(identity) => crypto::decrypt_file(input, output, identity),
        }
    }
}

/// Encrypts every plaintext directory with a matching `.enc` twin under `root`.
///
/// Loads the public key once, then processes each pair in turn. Returns the
/// number of files encrypted.
///
/// # Errors
///
/// Fails if the public key cannot be loaded, or if any single file fails to
/// encrypt (aborting the remaining batch).
pub fn encrypt_all(root: &Path, keys: &KeyPaths) -> AppResult<usize> {
    let recipient = crypto::load_recipient(&keys.public_key)?;
    run_all(root, &Cipher::Encrypt(recipient))
}

/// Decrypts every `.enc` twin under `root` back into its plaintext directory.
///
/// Loads the private key once, then processes each pair in turn. Returns the
/// number of files decrypted.
///
/// # Errors
///
/// Fails if the private key cannot be loaded, or if any single file fails to
/// decrypt (aborting the remaining batch).
pub fn decrypt_all(root: &Path, keys: &KeyPaths) -> AppResult<usize> {
    let identity = crypto::load_identity(&keys.private_key)?;
    run_all(root, &Cipher::Decrypt(identity))
}

fn run_all(root: &Path, cipher: &Cipher) -> AppResult<usize> {
    println!("Listing matched pattern directories...");
    println!("--------------------------------------");

    let pairs = find_directory_pairs(root)?;
    let mut processed = 0;
    for pair in &pairs {
        processed += process_pair(pair, cipher)?;
    }

    info!(
        "{} {} file(s) across {} pair(s)",
        cipher.label(),
        processed,
        pairs.len()
    );
    Ok(processed)
}

/// Processes every file of one directory pair in the given direction.
///
/// The destination path of each file is the destination directory joined
/// with the file's path relative to the source directory; missing
/// intermediate directories are created first. Each transformation is
/// reported to the user as it happens. A missing source side simply yields
/// zero files.
///
/// # Errors
///
/// Propagates the first per-file failure, aborting the rest of the pair.
pub fn process_pair(pair: &DirectoryPair, cipher: &Cipher) -> AppResult<usize> {
    let (source, dest) = cipher.endpoints(pair);
    debug!("Processing pair: {:?} -> {:?}", source, dest);

    let mut count = 0;
    for entry in WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let input = entry.path();
        let relative = input
            .strip_prefix(source)
            .map_err(|e| AppError::Io(io::Error::other(e)))?;
        let output = dest.join(relative);

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }

        println!(
            "[{}] [{}] -> [{}]",
            cipher.label(),
            input.display(),
            output.display()
        );
        cipher.run(input, &output)?;
        count += 1;
    }

    Ok(count)
}
