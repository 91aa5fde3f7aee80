//! pixelseal - sealed messages in image pixels
//!
//! A CLI tool for LSB image steganography with passphrase-based
//! authenticated encryption.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CapacityCommand, CommandExecutor, DecodeCommand, EncodeCommand, InspectCommand};

/// pixelseal - sealed messages in image pixels
///
/// Hides a passphrase-sealed message in the least significant bits of an
/// image. Carriers are always written as PNG.
#[derive(Parser)]
#[command(name = "pixelseal")]
#[command(version)]
#[command(about = "Hide passphrase-sealed messages in lossless images")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a message or file inside a cover image
    Encode(EncodeCommand),

    /// Recover a hidden message from a carrier image
    Decode(DecodeCommand),

    /// Show how much data an image can hide
    Capacity(CapacityCommand),

    /// Check an image for a payload frame without decrypting it
    Inspect(InspectCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => cmd.execute(),
        Commands::Decode(cmd) => cmd.execute(),
        Commands::Capacity(cmd) => cmd.execute(),
        Commands::Inspect(cmd) => cmd.execute(),
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
