//! Export encoding for the supported file formats.
//!
//! JPEG uses a fixed quality setting chosen for export use; PNG and BMP are
//! lossless. Channel handling per format:
//! - PNG keeps the buffer's layout (RGBA or grayscale)
//! - JPEG has no alpha channel, so RGBA input is flattened to RGB
//! - BMP is always written as 24-bit RGB for maximum viewer compatibility

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::io::Cursor;
use thiserror::Error;

use crate::buffer::{ChannelLayout, PixelBuffer};

/// JPEG export quality (1-100).
pub const JPEG_QUALITY: u8 = 90;

/// Errors that can occur during image encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Target file format for export.
///
/// The format is an explicit user choice from the save dialog's filter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormat {
    /// Canonical file extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
        }
    }

    /// Parse a format from a file extension, case-insensitively.
    ///
    /// Accepts an optional leading dot and both `jpg` and `jpeg`.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "bmp" => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Append this format's extension to `file_name` unless it already
    /// carries a matching one.
    ///
    /// The save dialog reports the name the user typed and the filter they
    /// picked separately; this makes the two agree.
    pub fn ensure_extension(self, file_name: &str) -> String {
        if let Some((_, ext)) = file_name.rsplit_once('.') {
            if ImageFormat::from_extension(ext) == Some(self) {
                return file_name.to_string();
            }
        }
        format!("{}.{}", file_name, self.extension())
    }
}

/// Encode a pixel buffer to file bytes in the given format.
///
/// # Arguments
///
/// * `image` - The buffer to export
/// * `format` - Target format from the user's save-dialog choice
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty buffer and
/// `EncodeError::EncodingFailed` when the codec reports an error.
pub fn encode_image(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    if image.width == 0 || image.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: image.width,
            height: image.height,
        });
    }

    let mut buffer = Cursor::new(Vec::new());

    match format {
        ImageFormat::Png => {
            let color_type = match image.layout {
                ChannelLayout::Rgba8 => ExtendedColorType::Rgba8,
                ChannelLayout::Gray8 => ExtendedColorType::L8,
            };
            PngEncoder::new(&mut buffer)
                .write_image(&image.pixels, image.width, image.height, color_type)
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
        ImageFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
            match image.layout {
                ChannelLayout::Rgba8 => {
                    // JPEG cannot carry alpha
                    let rgb = to_rgb_bytes(image);
                    encoder
                        .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
                }
                ChannelLayout::Gray8 => encoder.write_image(
                    &image.pixels,
                    image.width,
                    image.height,
                    ExtendedColorType::L8,
                ),
            }
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
        ImageFormat::Bmp => {
            let rgb = to_rgb_bytes(image);
            BmpEncoder::new(&mut buffer)
                .write_image(&rgb, image.width, image.height, ExtendedColorType::Rgb8)
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        }
    }

    Ok(buffer.into_inner())
}

/// Flatten a buffer to packed RGB bytes, dropping alpha and expanding gray.
fn to_rgb_bytes(image: &PixelBuffer) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(image.pixel_count() as usize * 3);
    match image.layout {
        ChannelLayout::Rgba8 => {
            for px in image.pixels.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
        }
        ChannelLayout::Gray8 => {
            for &v in &image.pixels {
                rgb.extend_from_slice(&[v, v, v]);
            }
        }
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================
