//! Constants used throughout the application.
//!
//! Centralizing the naming conventions here keeps the directory-pairing and
//! key-location rules consistent and easy to reference.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "direnc";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Bulk encryption of paired directories with an age key pair";

// Directory Pairing
/// Suffix marking a directory as the encrypted twin of a sibling plaintext
/// directory. Any directory `X.enc` is implicitly paired with `X`.
pub const ENCRYPTED_DIR_SUFFIX: &str = ".enc";

// Key Material
/// Suffix appended to the key base path for the private key file.
pub const PRIVATE_KEY_SUFFIX: &str = ".private_key";
/// Suffix appended to the key base path for the public key file.
pub const PUBLIC_KEY_SUFFIX: &str = ".public_key";
/// Default key base name under the user's home directory.
pub const DEFAULT_KEY_BASENAME: &str = ".direnc";
/// Identity label recorded in newly generated private key files.
pub const DEFAULT_KEY_LABEL: &str = "default";

// Configuration Keys & Environment Variables
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";

// File System Parameters
/// POSIX permissions for newly created private key files (owner read/write).
#[cfg(unix)]
pub const PRIVATE_KEY_PERMISSIONS: u32 = 0o600;
