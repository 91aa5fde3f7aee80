//! Capacity command - report how much an image can hide.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pixelseal::stego::capacity::{capacity_bits, max_plaintext_len};
use pixelseal::{AuthenticatedCipher, ChaChaCipher, ImageCodec, PngCodec};

use super::{require_file, CommandExecutor};

/// Show how many bits an image can carry and the largest message that fits.
#[derive(Args, Debug)]
pub struct CapacityCommand {
    /// Path to the cover image
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CommandExecutor for CapacityCommand {
    fn execute(&self) -> Result<()> {
        require_file(&self.input)?;

        let image = PngCodec
            .decode(&self.input)
            .with_context(|| format!("Failed to read image {}", self.input.display()))?;

        let (width, height) = image.dimensions();
        println!("Image: {} ({}x{})", self.input.display(), width, height);
        println!("  Capacity: {} bits", capacity_bits(&image));
        println!(
            "  Max message: {} bytes",
            max_plaintext_len(&image, ChaChaCipher.overhead())
        );

        Ok(())
    }
}
