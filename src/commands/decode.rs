//! Decode command - recover a hidden message from a carrier image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pixelseal::config::PASSPHRASE_ENV;
use pixelseal::{decode_with_cipher, ChaChaCipher, ImageCodec, PngCodec};

use super::{require_file, CommandExecutor};

/// Recover a hidden message from a carrier image.
///
/// Fails if the image carries no payload, if the payload is damaged, or if
/// the passphrase is wrong.
///
/// Use -o/--output to write raw bytes to a file (required for binary data).
/// Without -o, output is printed as text (lossy UTF-8 conversion).
#[derive(Args, Debug)]
pub struct DecodeCommand {
    /// Path to the carrier image
    #[arg(short, long)]
    pub input: PathBuf,

    /// Passphrase used when the message was hidden
    #[arg(short, long, env = PASSPHRASE_ENV, hide_env_values = true)]
    pub passphrase: String,

    /// Output file for the recovered bytes
    /// If not specified, prints the message as text to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommandExecutor for DecodeCommand {
    fn execute(&self) -> Result<()> {
        require_file(&self.input)?;

        let carrier = PngCodec
            .decode(&self.input)
            .with_context(|| format!("Failed to read carrier image {}", self.input.display()))?;

        let message = decode_with_cipher(&ChaChaCipher, &carrier, &self.passphrase)
            .with_context(|| format!("Failed to recover message from {}", self.input.display()))?;

        match &self.output {
            Some(path) => {
                pixelseal::fs::write_atomic(path, &message)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                println!("Recovered {} bytes to {}", message.len(), path.display());
            }
            None => println!("{}", String::from_utf8_lossy(&message)),
        }

        Ok(())
    }
}
