/*!
# direnc

direnc bulk-encrypts and bulk-decrypts paired directories with a single age
key pair. Any directory named `X.enc` is the encrypted twin of a sibling
plaintext directory `X`: `encrypt` walks every plaintext side into its twin,
`decrypt` walks every twin back, and `keygen` creates the key pair once at a
fixed per-user location.

## Core Features

- Generate an x25519 key pair at `~/.direnc` (or a custom base path)
- Encrypt every file of each plaintext directory into its `.enc` twin
- Decrypt every file of each `.enc` twin back into its plaintext directory
- Relative sub-paths are mirrored exactly between the two sides

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Key path resolution
- `errors`: Error handling infrastructure
- `crypto`: age key pair generation and per-file encryption
- `pairing`: Discovery of `.enc` directory pairs
- `ops`: The keygen and bulk encrypt/decrypt operations

## Usage Example

```rust,no_run
use direnc::{ops, KeyPaths};
use std::path::Path;

fn main() -> direnc::AppResult<()> {
    let keys = KeyPaths::resolve("")?;
    keys.verify_exists()?;
    ops::decrypt_all(Path::new("."), &keys)?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Key path resolution and configuration
pub mod config;
/// Constants shared across the application
pub mod constants;
/// age-backed key pair and file cipher operations
pub mod crypto;
/// Error types and utilities for error handling
pub mod errors;
/// High-level keygen and bulk cipher operations
pub mod ops;
/// Directory pair discovery
pub mod pairing;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::KeyPaths;
pub use errors::{AppError, AppResult};
pub use pairing::DirectoryPair;
