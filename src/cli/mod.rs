//! Command-line interface for direnc.

use crate::constants::{APP_DESCRIPTION, APP_NAME};
use clap::{Parser, Subcommand};

/// Command-line arguments for the direnc application.
///
/// With no subcommand, direnc resolves the default key path (which must
/// already exist) and decrypts every `.enc` twin under the current
/// directory.
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,
}

/// The available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate a new key pair (refuses to overwrite existing key files)
    Keygen {
        /// Base path for the key pair files (defaults to ~/.direnc)
        #[clap(short = 'p', long, default_value = "")]
        path: String,
    },
    /// Encrypt all plaintext directories with a matching ".enc" twin
    Encrypt {
        /// Base path for the key pair files (defaults to ~/.direnc)
        #[clap(short = 'p', long, default_value = "")]
        path: String,
    },
    /// Decrypt all ".enc" twins back to plaintext
    Decrypt {
        /// Base path for the key pair files (defaults to ~/.direnc)
        #[clap(short = 'p', long, default_value = "")]
        path: String,
    },
}

impl CliArgs {
    /// Parse command-line arguments, returning the clap error instead of
    /// exiting so the caller decides how parse failures are reported.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
