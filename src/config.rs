//! Output configuration for the command line.
//!
//! Carriers are never written over their source. Unless an explicit path is
//! given, output lands in `<output_dir>/<stem>_<suffix>.png`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable holding the passphrase.
pub const PASSPHRASE_ENV: &str = "PIXELSEAL_PASSPHRASE";

/// Environment variable overriding the default output directory.
pub const OUTPUT_DIR_ENV: &str = "PIXELSEAL_OUTPUT_DIR";

/// Default directory for generated carriers.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default file name suffix for generated carriers.
pub const DEFAULT_SUFFIX: &str = "stego";

/// Extension of every generated carrier.
pub const OUTPUT_EXTENSION: &str = "png";

/// Where and how generated carriers are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory for generated files.
    pub output_dir: PathBuf,

    /// Suffix appended to the input stem.
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl OutputConfig {
    /// Create a config writing into `output_dir` with the default suffix.
    pub fn with_output_dir<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// The default output path for `input`: `<dir>/<stem>_<suffix>.png`.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        self.output_dir
            .join(format!("{}_{}.{}", stem, self.suffix, OUTPUT_EXTENSION))
    }

    /// Resolves where to write the carrier for `input`.
    ///
    /// An explicit path wins. Otherwise the default path is used and the
    /// output directory is created if needed.
    pub fn resolve(&self, explicit: Option<&Path>, input: &Path) -> io::Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(self.output_path(input))
    }
}
