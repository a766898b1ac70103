/*!
# direnc - Bulk Directory Encryption

direnc pairs every directory named `X.enc` with its sibling plaintext
directory `X` and moves file contents between the two sides with a single
age key pair.

## Usage

```
direnc [COMMAND]

Commands:
  keygen   Generate a new key pair (refuses to overwrite existing key files)
  encrypt  Encrypt all plaintext directories with a matching ".enc" twin
  decrypt  Decrypt all ".enc" twins back to plaintext

Options:
  -p, --path <PATH>  Base path for the key pair files (defaults to ~/.direnc)
```

Run without a command to decrypt with the default key path, which must
already exist. Directory pairs are discovered under the current working
directory.
*/

use clap::error::ErrorKind;
use direnc::cli::{CliArgs, Command};
use direnc::config::KeyPaths;
use direnc::errors::{AppError, AppResult, KeyError};
use direnc::ops;
use std::env;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        error!("Fatal: {}", err);
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// The main application flow: parse arguments, resolve key paths (verifying
/// existence before any bulk work), then dispatch the selected operation.
fn run() -> AppResult<()> {
    info!("Starting direnc");

    let args = match CliArgs::try_parse_args() {
        Ok(args) => args,
        Err(err) => return handle_parse_failure(err),
    };
    debug!("CLI arguments: {:?}", args);

    let root = env::current_dir()?;

    match args.command {
        None => {
            // No arguments: decrypt with the default key path
            let keys = KeyPaths::resolve("")?;
            keys.verify_exists()?;
            ops::decrypt_all(&root, &keys)?;
        }
        Some(Command::Keygen { path }) => {
            let keys = KeyPaths::resolve(&path)?;
            match ops::generate_key(&keys) {
                Ok(()) => println!("Key pair successfully created."),
                // Existing key material is reported, not fatal
                Err(AppError::Key(err @ KeyError::Conflict { .. })) => {
                    warn!("Key generation skipped: {}", err);
                    println!("{}", err);
                }
                Err(err) => return Err(err),
            }
        }
        Some(Command::Encrypt { path }) => {
            let keys = KeyPaths::resolve(&path)?;
            keys.verify_exists()?;
            ops::encrypt_all(&root, &keys)?;
        }
        Some(Command::Decrypt { path }) => {
            let keys = KeyPaths::resolve(&path)?;
            keys.verify_exists()?;
            ops::decrypt_all(&root, &keys)?;
        }
    }

    Ok(())
}

/// Reports an argument parse failure.
///
/// Help and version requests are printed and treated as success. Genuine
/// parse failures are printed as a notice and do not fail the process in
/// release builds; debug builds escalate them to a hard failure so broken
/// invocations surface during development.
fn handle_parse_failure(err: clap::Error) -> AppResult<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            err.print()?;
            Ok(())
        }
        _ => {
            warn!("Argument parse failure: {}", err);
            err.print()?;
            if cfg!(debug_assertions) {
                return Err(AppError::Cli(err.to_string()));
            }
            Ok(())
        }
    }
}
