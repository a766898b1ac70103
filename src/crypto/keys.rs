//! Key pair generation and loading.
//!
//! Key material lives in two plain files derived from a shared base path:
//! `<base>.private_key` holds an age identity file (comment headers plus the
//! `AGE-SECRET-KEY-...` line) and `<base>.public_key` holds the matching
//! `age1...` recipient. The formats are owned entirely by the age ecosystem.

use crate::config::KeyPaths;
use crate::errors::{AppResult, CryptoError};
use age::secrecy::ExposeSecret;
use age::x25519::{Identity, Recipient};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Generates a fresh x25519 key pair and writes both key files.
///
/// The private key file is written in the age identity file format with the
/// given label recorded as a comment header, and restricted to owner
/// read/write on unix. The public key file contains the matching recipient.
///
/// Callers are responsible for the existence precondition; this function
/// overwrites whatever is at the target paths.
///
/// # Errors
///
/// Returns an error if either file cannot be written.
pub fn generate_key_pair(paths: &KeyPaths, label: &str) -> AppResult<()> {
    let identity = Identity::generate();
    let recipient = identity.to_public();

    let identity_file = format!(
        "# identity: {}\n# public key: {}\n{}\n",
        label,
        recipient,
        identity.to_string().expose_secret()
    );
    fs::write(&paths.private_key, identity_file)?;

    #[cfg(unix)]
    {
        use crate::constants::PRIVATE_KEY_PERMISSIONS;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(
            &paths.private_key,
            fs::Permissions::from_mode(PRIVATE_KEY_PERMISSIONS),
        )?;
    }

    fs::write(&paths.public_key, format!("{}\n", recipient))?;

    info!(
        "Generated key pair: {:?} / {:?}",
        paths.private_key, paths.public_key
    );
    Ok(())
}

/// Loads the age recipient (public key) from a key file.
///
/// Comment lines starting with `#` and blank lines are skipped; the first
/// remaining line must parse as an `age1...` recipient.
///
/// # Errors
///
/// Returns `CryptoError::InvalidRecipient` if the file holds no parseable
/// recipient, or an I/O error if it cannot be read.
pub fn load_recipient(path: &Path) -> AppResult<Recipient> {
    let contents = fs::read_to_string(path)?;
    let line = first_key_line(&contents).ok_or_else(|| {
        CryptoError::InvalidRecipient(format!("{}: no public key found", path.display()))
    })?;
    let recipient = line
        .parse::<Recipient>()
        .map_err(|e| CryptoError::InvalidRecipient(format!("{}: {}", path.display(), e)))?;
    debug!("Loaded recipient from {:?}", path);
    Ok(recipient)
}

/// Loads the age identity (private key) from a key file.
///
/// Identity files are stored unencrypted, so no passphrase is involved.
///
/// # Errors
///
/// Returns `CryptoError::InvalidIdentity` if the file holds no parseable
/// identity, or an I/O error if it cannot be read.
pub fn load_identity(path: &Path) -> AppResult<Identity> {
    let contents = fs::read_to_string(path)?;
    let line = first_key_line(&contents).ok_or_else(|| {
        CryptoError::InvalidIdentity(format!("{}: no private key found", path.display()))
    })?;
    let identity = line
        .parse::<Identity>()
        .map_err(|e| CryptoError::InvalidIdentity(format!("{}: {}", path.display(), e)))?;
    debug!("Loaded identity from {:?}", path);
    Ok(identity)
}

/// Returns the first non-empty, non-comment line of a key file.
fn first_key_line(contents: &str) -> Option<&str> {
    contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyPaths;
    use tempfile::tempdir;

    fn key_paths_in(dir: &Path) -> KeyPaths {
        KeyPaths::resolve(dir.join("testkeys").to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_generate_writes_both_files() {
        let dir = tempdir().unwrap();
        let paths = key_paths_in(dir.path());

        generate_key_pair(&paths, "default").unwrap();

        assert!(paths.private_key.exists());
        assert!(paths.public_key.exists());

        let private = fs::read_to_string(&paths.private_key).unwrap();
        assert!(private.contains("# identity: default"));
        assert!(private.contains("AGE-SECRET-KEY-"));

        let public = fs::read_to_string(&paths.public_key).unwrap();
        assert!(public.starts_with("age1"));
    }

    #[cfg(unix)]
    #[test]
    fn test_private_key_permissions_restricted() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let paths = key_paths_in(dir.path());
        generate_key_pair(&paths, "default").unwrap();

        let mode = fs::metadata(&paths.private_key).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_load_roundtrip_matches_generated_pair() {
        let dir = tempdir().unwrap();
        let paths = key_paths_in(dir.path());
        generate_key_pair(&paths, "default").unwrap();

        let identity = load_identity(&paths.private_key).unwrap();
        let recipient = load_recipient(&paths.public_key).unwrap();

        // The public key file holds the recipient derived from the identity
        assert_eq!(identity.to_public().to_string(), recipient.to_string());
    }

    #[test]
    fn test_loader_skips_comment_lines() {
        assert_eq!(
            first_key_line("# comment\n\n# another\nage1abc\n"),
            Some("age1abc")
        );
        assert_eq!(first_key_line("# only comments\n"), None);
        assert_eq!(first_key_line(""), None);
    }

    #[test]
    fn test_load_identity_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.private_key");
        fs::write(&path, "not a key\n").unwrap();

        match load_identity(&path) {
            Err(err) => assert!(format!("{}", err).contains("Invalid private key")),
            Ok(_) => panic!("Expected InvalidIdentity error"),
        }
    }

    #[test]
    fn test_load_recipient_rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.public_key");
        fs::write(&path, "").unwrap();

        assert!(load_recipient(&path).is_err());
    }
}
