//! Encode command - hide a message or file inside a cover image.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::info;

use pixelseal::config::{OutputConfig, DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, PASSPHRASE_ENV};
use pixelseal::fs;
use pixelseal::stego::capacity::capacity_bits;
use pixelseal::{encode_with_cipher, required_bits, ChaChaCipher, ImageCodec, PngCodec};

use super::{require_file, CommandExecutor};

/// Hide a message inside a cover image.
///
/// The message is sealed with the passphrase and written into the least
/// significant bits of the image. Output is always PNG: lossy formats would
/// destroy the hidden data. The cover image itself is never modified.
#[derive(Args, Debug)]
pub struct EncodeCommand {
    /// Path to the cover image (PNG, BMP, JPEG, GIF, TIFF)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Text message to hide (mutually exclusive with --file)
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub message: Option<String>,

    /// File whose raw bytes to hide (mutually exclusive with --message)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Passphrase for sealing the message
    #[arg(short, long, env = PASSPHRASE_ENV, hide_env_values = true)]
    pub passphrase: String,

    /// Output PNG path (default: <output-dir>/<stem>_stego.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory for generated carriers when --output is not given
    #[arg(long, env = OUTPUT_DIR_ENV, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl CommandExecutor for EncodeCommand {
    fn execute(&self) -> Result<()> {
        require_file(&self.input)?;

        let plaintext = self.read_plaintext()?;
        if plaintext.is_empty() {
            bail!("Message is empty; nothing to hide");
        }
        if self.passphrase.is_empty() {
            bail!("Passphrase must not be empty");
        }

        let codec = PngCodec;
        let cipher = ChaChaCipher;

        let cover = codec
            .decode(&self.input)
            .with_context(|| format!("Failed to read cover image {}", self.input.display()))?;

        let carrier = encode_with_cipher(&cipher, &cover, &plaintext, &self.passphrase)
            .with_context(|| format!("Failed to hide message in {}", self.input.display()))?;

        // Only touch the filesystem once the carrier exists in memory.
        let config = OutputConfig::with_output_dir(&self.output_dir);
        let output = config
            .resolve(self.output.as_deref(), &self.input)
            .with_context(|| format!("Failed to prepare {}", self.output_dir.display()))?;
        let overwrites_cover = fs::is_same_file(&self.input, &output)
            .with_context(|| format!("Failed to resolve {}", self.input.display()))?;
        if overwrites_cover {
            bail!(
                "Refusing to overwrite the cover image {}; choose another --output",
                self.input.display()
            );
        }

        codec
            .encode(&carrier, &output)
            .with_context(|| format!("Failed to write carrier to {}", output.display()))?;

        let used = required_bits(&cipher, plaintext.len());
        let available = capacity_bits(&cover);
        info!(output = %output.display(), "carrier written");

        println!("Hidden {} bytes in {}", plaintext.len(), output.display());
        println!(
            "  Capacity used: {} of {} bits ({:.1}%)",
            used,
            available,
            used as f64 * 100.0 / available as f64
        );

        Ok(())
    }
}

impl EncodeCommand {
    fn read_plaintext(&self) -> Result<Vec<u8>> {
        match (&self.message, &self.file) {
            (Some(message), _) => Ok(message.as_bytes().to_vec()),
            (None, Some(path)) => {
                require_file(path)?;
                std::fs::read(path)
                    .with_context(|| format!("Failed to read message file {}", path.display()))
            }
            (None, None) => bail!("Provide a message with --message or --file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelseal::Image;
    use tempfile::tempdir;

    fn command(input: PathBuf, output: Option<PathBuf>, output_dir: PathBuf) -> EncodeCommand {
        EncodeCommand {
            input,
            message: Some("hello".to_string()),
            file: None,
            passphrase: "pw".to_string(),
            output,
            output_dir,
        }
    }

    fn write_cover(path: &std::path::Path) {
        let cover = Image::from_fn(40, 40, |x, y| [x as u8, y as u8, 90]).unwrap();
        PngCodec.encode(&cover, path).unwrap();
    }

    #[test]
    fn test_refuses_output_spelled_differently_from_cover() {
        let dir = tempdir().unwrap();
        let cover = dir.path().join("cover.png");
        write_cover(&cover);
        let before = std::fs::read(&cover).unwrap();

        let cmd = command(
            cover.clone(),
            Some(dir.path().join(".").join("cover.png")),
            dir.path().join("out"),
        );

        let err = cmd.execute().unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert_eq!(std::fs::read(&cover).unwrap(), before);
    }

    #[test]
    fn test_writes_separate_carrier() {
        let dir = tempdir().unwrap();
        let cover = dir.path().join("cover.png");
        write_cover(&cover);
        let before = std::fs::read(&cover).unwrap();
        let out_dir = dir.path().join("out");

        command(cover.clone(), None, out_dir.clone()).execute().unwrap();

        let carrier = PngCodec.decode(&out_dir.join("cover_stego.png")).unwrap();
        assert_eq!(pixelseal::decode(&carrier, "pw").unwrap(), b"hello");
        assert_eq!(std::fs::read(&cover).unwrap(), before);
    }
}
