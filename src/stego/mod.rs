//! Image LSB steganography.
//!
//! - [`image`]: the decoded RGB buffer everything operates on
//! - [`bits`]: MSB-first byte/bit conversion
//! - [`frame`]: magic + length framing around the sealed message
//! - [`capacity`]: how many bits an image can carry
//! - [`lsb`]: embedding and extraction

pub mod bits;
pub mod capacity;
pub mod frame;
pub mod image;
pub mod lsb;

pub use capacity::{capacity_bits, ensure_fits, CapacityError};
pub use frame::{FrameError, Payload};
pub use self::image::{Image, ImageError};
pub use lsb::{embed, extract, read_lsbs};
