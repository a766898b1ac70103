//! Key path resolution for the direnc application.
//!
//! This module computes the locations of the private and public key files
//! from an optional user-supplied base path, with a fixed per-user default.
//! The resolved value is constructed once at startup and passed by parameter
//! into every component; nothing here is global or mutable.
//!
//! # Environment Variables
//!
//! - `HOME`: Used for the default key base path `~/.direnc` when no override
//!   is given.

use crate::constants::{
    DEFAULT_KEY_BASENAME, ENV_VAR_HOME, PRIVATE_KEY_SUFFIX, PUBLIC_KEY_SUFFIX,
};
use crate::errors::{AppError, AppResult, KeyError};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// The resolved locations of the private and public key files.
///
/// Both paths are always derived from the same base path by appending the
/// fixed `.private_key` and `.public_key` suffixes.
///
/// # Examples
///
/// ```
/// use direnc::KeyPaths;
///
/// let keys = KeyPaths::resolve("/tmp/mykeys").unwrap();
/// assert!(keys.private_key.to_string_lossy().ends_with(".private_key"));
/// assert!(keys.public_key.to_string_lossy().ends_with(".public_key"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPaths {
    /// Path of the private key file, used for decryption.
    pub private_key: PathBuf,
    /// Path of the public key file, used for encryption.
    pub public_key: PathBuf,
}

impl KeyPaths {
    /// Resolves key file paths from an optional base path override.
    ///
    /// An empty `base` selects the default location `$HOME/.direnc`.
    /// A non-empty `base` is expanded with `shellexpand` so `~` and
    /// environment variable references work.
    ///
    /// This performs pure path computation with no filesystem side effects;
    /// use [`KeyPaths::verify_exists`] to check that the files are present.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOME` is unset while the default is
    /// needed, or if path expansion fails.
    pub fn resolve(base: &str) -> AppResult<Self> {
        let base = if base.is_empty() {
            Self::default_base()?
        } else {
            shellexpand::full(base)
                .map_err(|e| AppError::Config(format!("Failed to expand key path: {}", e)))?
                .into_owned()
        };

        let paths = KeyPaths {
            private_key: PathBuf::from(format!("{}{}", base, PRIVATE_KEY_SUFFIX)),
            public_key: PathBuf::from(format!("{}{}", base, PUBLIC_KEY_SUFFIX)),
        };
        debug!("Resolved key paths: {:?}", paths);
        Ok(paths)
    }

    /// Computes the default key base path `$HOME/.direnc`.
    fn default_base() -> AppResult<String> {
        let home = env::var(ENV_VAR_HOME).map_err(|_| {
            AppError::Config(format!(
                "{} is not set; cannot locate the default key path",
                ENV_VAR_HOME
            ))
        })?;

        if home.is_empty() {
            return Err(AppError::Config(format!(
                "{} is empty; cannot locate the default key path",
                ENV_VAR_HOME
            )));
        }

        Ok(format!("{}/{}", home, DEFAULT_KEY_BASENAME))
    }

    /// Checks that both key files exist on disk.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Missing` naming both expected paths if either
    /// file is absent.
    pub fn verify_exists(&self) -> Result<(), KeyError> {
        if !self.private_key.exists() || !self.public_key.exists() {
            return Err(KeyError::Missing {
                private_key: self.private_key.clone(),
                public_key: self.public_key.clone(),
            });
        }
        Ok(())
    }
}
