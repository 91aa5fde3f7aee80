//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod capacity;
mod decode;
mod encode;
mod inspect;

pub use capacity::CapacityCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use inspect::InspectCommand;

use std::path::Path;

use anyhow::{bail, Result};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Ensures `path` names an existing regular file.
fn require_file(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }
    if !path.is_file() {
        bail!("Input is not a regular file: {}", path.display());
    }
    Ok(())
}
