//! Image decoding for PhotoEdit.
//!
//! This module turns file bytes into a `PixelBuffer`:
//! - PNG, JPEG and BMP are recognized by content, not by file name
//! - JPEG input gets EXIF orientation correction so photos straight from a
//!   camera open the right way up
//! - A failed decode returns an error and installs nothing; the caller's
//!   current image is untouched
//!
//! All operations are synchronous; the UI layer is expected to call them
//! from a worker when decoding large files.

mod reader;
mod types;

pub use reader::decode_image;
pub use types::{DecodeError, Orientation};
