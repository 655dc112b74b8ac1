//! Image encoding for PhotoEdit.
//!
//! This module turns the current `PixelBuffer` into file bytes for export:
//! - PNG, JPEG and BMP output
//! - The target format is explicit, chosen by the user in the save dialog,
//!   never inferred from the file name
//! - File-name extension handling for the UI's save path
//!
//! The engine only produces bytes; writing them to disk is the UI layer's
//! job.

mod writer;

pub use writer::{encode_image, EncodeError, ImageFormat, JPEG_QUALITY};
