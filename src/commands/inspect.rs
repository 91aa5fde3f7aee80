//! Inspect command - look for a payload frame without the passphrase.

use std::path::PathBuf;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Args;

use pixelseal::stego::capacity::capacity_bits;
use pixelseal::stego::extract;
use pixelseal::{ImageCodec, PngCodec};

use super::{require_file, CommandExecutor};

/// Check whether an image carries a pixelseal payload.
///
/// Reports the frame's declared length. Nothing is decrypted. Fails when no
/// frame is present, so scripts can branch on the exit status.
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// Path to the image to inspect
    #[arg(short, long)]
    pub input: PathBuf,

    /// Also print the sealed token as base64
    #[arg(long)]
    pub show_token: bool,
}

impl CommandExecutor for InspectCommand {
    fn execute(&self) -> Result<()> {
        require_file(&self.input)?;

        let image = PngCodec
            .decode(&self.input)
            .with_context(|| format!("Failed to read image {}", self.input.display()))?;

        let payload = extract(&image)
            .with_context(|| format!("No payload in {}", self.input.display()))?;

        println!("Payload found in {}", self.input.display());
        println!("  Sealed token: {} bytes", payload.length());
        println!(
            "  Carrier usage: {} of {} bits",
            payload.framed_len() * 8,
            capacity_bits(&image)
        );
        if self.show_token {
            println!("{}", BASE64.encode(payload.ciphertext()));
        }

        Ok(())
    }
}
