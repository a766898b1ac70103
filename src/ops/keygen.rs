//! Key pair generation with an overwrite guard.

use crate::config::KeyPaths;
use crate::constants::DEFAULT_KEY_LABEL;
use crate::crypto;
use crate::errors::{AppResult, KeyError};
use tracing::{info, warn};

/// Creates a new key pair at the resolved paths.
///
/// Refuses to touch the filesystem if either key file already exists:
/// existing material is never overwritten. Callers treat the refusal as a
/// reportable outcome rather than a fatal failure.
///
/// # Errors
///
/// Returns `KeyError::Conflict` (listing both paths) when either file
/// exists, or an underlying error if generation itself fails.
pub fn generate_key(keys: &KeyPaths) -> AppResult<()> {
    if keys.private_key.exists() || keys.public_key.exists() {
        warn!("Refusing to overwrite existing key material");
        return Err(KeyError::Conflict {
            private_key: keys.private_key.clone(),
            public_key: keys.public_key.clone(),
        }
        .into());
    }

    crypto::generate_key_pair(keys, DEFAULT_KEY_LABEL)?;
    info!("Key pair created");
    Ok(())
}
