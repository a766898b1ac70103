//! Age encryption of individual files.
//!
//! Files are encrypted to the x25519 recipient with ASCII armor and
//! decrypted with the matching identity, streaming in both directions so
//! file size never matters. Armor on the way in is optional: the decryptor
//! accepts armored and binary age input alike.

use crate::errors::{AppResult, CryptoError};
use age::armor::{ArmoredReader, ArmoredWriter, Format};
use age::x25519::{Identity, Recipient};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::iter;
use std::path::Path;
use tracing::trace;

/// Encrypts `input_path` to `output_path` for the given recipient.
///
/// Output is an armored age file; age's authenticated encryption covers
/// integrity of the ciphertext.
///
/// # Errors
///
/// Returns `CryptoError::EncryptionFailed` if the age layer rejects the
/// operation, or an I/O error for file problems.
pub fn encrypt_file(input_path: &Path, output_path: &Path, recipient: &Recipient) -> AppResult<()> {
    trace!("Encrypting {:?} -> {:?}", input_path, output_path);

    let encryptor =
        age::Encryptor::with_recipients(vec![
            Box::new(recipient.clone()) as Box<dyn age::Recipient + Send>
        ])
        .ok_or_else(|| CryptoError::InvalidRecipient("no recipient supplied".to_string()))?;

    let mut reader = BufReader::new(File::open(input_path)?);
    let output = File::create(output_path)?;
    let armored = ArmoredWriter::wrap_output(BufWriter::new(output), Format::AsciiArmor)?;

    let mut writer = encryptor
        .wrap_output(armored)
        .map_err(CryptoError::EncryptionFailed)?;
    io::copy(&mut reader, &mut writer)?;
    writer.finish()?.finish()?.flush()?;

    Ok(())
}

/// Decrypts `input_path` to `output_path` with the given identity.
///
/// # Errors
///
/// Returns `CryptoError::WrongKey` when the file was encrypted for a
/// different key pair, `CryptoError::UnsupportedFormat` for
/// passphrase-encrypted input, `CryptoError::DecryptionFailed` for corrupt
/// input, or an I/O error for file problems.
pub fn decrypt_file(input_path: &Path, output_path: &Path, identity: &Identity) -> AppResult<()> {
    trace!("Decrypting {:?} -> {:?}", input_path, output_path);

    let input = BufReader::new(File::open(input_path)?);
    let decryptor = match age::Decryptor::new(ArmoredReader::new(input))
        .map_err(CryptoError::DecryptionFailed)?
    {
        age::Decryptor::Recipients(d) => d,
        age::Decryptor::Passphrase(_) => return Err(CryptoError::UnsupportedFormat.into()),
    };

    let mut reader = decryptor
        .decrypt(iter::once(identity as &dyn age::Identity))
        .map_err(|err| match err {
            age::DecryptError::NoMatchingKeys => CryptoError::WrongKey,
            other => CryptoError::DecryptionFailed(other),
        })?;

    let mut output = BufWriter::new(File::create(output_path)?);
    io::copy(&mut reader, &mut output)?;
    output.flush()?;

    Ok(())
}
