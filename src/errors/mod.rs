//! Error handling utilities for the direnc application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::path::PathBuf;
use thiserror::Error;

/// Represents error cases involving key material on disk.
///
/// Both variants name the two expected key file paths so the user always
/// knows exactly which files the application looked for.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Required key files are absent when an operation needs them.
    ///
    /// This is fatal for encrypt/decrypt and is checked before any file
    /// work begins.
    #[error(
        "Key files missing: [{}] and [{}]. Run `direnc keygen` to create them.",
        .private_key.display(),
        .public_key.display()
    )]
    Missing {
        /// The expected private key file path
        private_key: PathBuf,
        /// The expected public key file path
        public_key: PathBuf,
    },

    /// Key generation was requested but key files already exist.
    ///
    /// Generation refuses to overwrite existing material; callers report
    /// this to the user and continue normally.
    #[error(
        "Key files exist: [{}] and [{}]. Please move or remove them before key creation.",
        .public_key.display(),
        .private_key.display()
    )]
    Conflict {
        /// The private key file path that blocked generation
        private_key: PathBuf,
        /// The public key file path that blocked generation
        public_key: PathBuf,
    },
}

/// Represents specific error cases that can occur during cryptographic operations.
///
/// # Examples
///
/// ```
/// use direnc::errors::CryptoError;
///
/// let error = CryptoError::InvalidRecipient("not an age public key".to_string());
/// assert!(format!("{}", error).contains("public key"));
/// ```
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The public key file does not contain a usable age recipient.
    #[error("Invalid public key: {0}")]
    InvalidRecipient(String),

    /// The private key file does not contain a usable age identity.
    #[error("Invalid private key: {0}")]
    InvalidIdentity(String),

    /// The input was encrypted for a different key pair.
    #[error("The private key does not match this file; it was encrypted for a different key pair.")]
    WrongKey,

    /// Encrypted data uses an unsupported encryption format.
    #[error("Unsupported encryption format; expected a file encrypted to an age key pair.")]
    UnsupportedFormat,

    /// Error during encryption of a file.
    #[error("Encryption failed: {0}")]
    EncryptionFailed(#[source] age::EncryptError),

    /// Error during decryption of a file.
    #[error("Decryption failed: {0}")]
    DecryptionFailed(#[source] age::DecryptError),
}

/// Represents all possible errors that can occur in the direnc application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Converting from an IO error:
/// ```
/// use direnc::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration and path resolution.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to key material on disk.
    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    /// Errors related to cryptographic operations.
    #[error("Cryptographic error: {0}")]
    Crypto(#[from] CryptoError),

    /// Command-line arguments did not parse; escalated in debug builds only.
    #[error("Argument parse failure: {0}")]
    Cli(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_key_missing_names_both_paths() {
        let error = KeyError::Missing {
            private_key: PathBuf::from("/home/u/.direnc.private_key"),
            public_key: PathBuf::from("/home/u/.direnc.public_key"),
        };
        let message = format!("{}", error);
        assert!(message.contains("/home/u/.direnc.private_key"));
        assert!(message.contains("/home/u/.direnc.public_key"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_key_conflict_names_both_paths() {
        let error = KeyError::Conflict {
            private_key: PathBuf::from("/tmp/keys.private_key"),
            public_key: PathBuf::from("/tmp/keys.public_key"),
        };
        let message = format!("{}", error);
        assert!(message.contains("/tmp/keys.private_key"));
        assert!(message.contains("/tmp/keys.public_key"));
        assert!(message.contains("exist"));
    }

    #[test]
    fn test_key_error_conversion_to_app_error() {
        let key_error = KeyError::Missing {
            private_key: PathBuf::from("/k.private_key"),
            public_key: PathBuf::from("/k.public_key"),
        };
        let app_error: AppError = key_error.into();

        match app_error {
            AppError::Key(KeyError::Missing { private_key, .. }) => {
                assert_eq!(private_key, PathBuf::from("/k.private_key"));
            }
            _ => panic!("Expected AppError::Key variant"),
        }
    }

    #[test]
    fn test_crypto_error_display() {
        let error = CryptoError::InvalidIdentity("/keys.private_key: bad key".to_string());
        let message = format!("{}", error);
        assert!(message.contains("Invalid private key"));
        assert!(message.contains("/keys.private_key"));

        let wrapped: AppError = CryptoError::WrongKey.into();
        let message = format!("{}", wrapped);
        assert!(message.starts_with("Cryptographic error: "));
        assert!(message.contains("different key pair"));
    }

    #[test]
    fn test_app_error_display_prefixes() {
        let errors = vec![
            (
                AppError::Config("bad path".to_string()),
                "Configuration error: ",
            ),
            (AppError::Io(io::Error::other("boom")), "I/O error: "),
            (
                AppError::Cli("unknown subcommand".to_string()),
                "Argument parse failure: ",
            ),
        ];

        for (error, expected_prefix) in errors {
            let display = format!("{}", error);
            assert!(
                display.starts_with(expected_prefix),
                "expected prefix {:?} in {:?}",
                expected_prefix,
                display
            );
        }
    }

    #[test]
    fn test_app_error_source_chaining() {
        let key_error = KeyError::Conflict {
            private_key: PathBuf::from("/k.private_key"),
            public_key: PathBuf::from("/k.public_key"),
        };
        let app_error = AppError::Key(key_error);

        let source = app_error
            .source()
            .expect("AppError::Key should have a source");
        assert!(source.downcast_ref::<KeyError>().is_some());

        let config_error = AppError::Config("no home".to_string());
        assert!(config_error.source().is_none());
    }
}
