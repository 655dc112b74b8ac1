//! Byte-stream decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageFormat;
use image::ImageReader;

use super::{DecodeError, Orientation};
use crate::buffer::PixelBuffer;

/// Decode PNG, JPEG or BMP bytes into an RGBA pixel buffer.
///
/// The format is sniffed from the content. JPEG input additionally gets its
/// EXIF orientation applied before conversion, so the returned buffer is
/// always upright.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not one of the
/// supported formats, and `DecodeError::CorruptedFile` if the file is
/// recognized but cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;
    if !matches!(
        format,
        ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Bmp
    ) {
        return Err(DecodeError::InvalidFormat);
    }

    // Only JPEG carries EXIF we care about; extract before decoding
    let orientation = if format == ImageFormat::Jpeg {
        extract_orientation(bytes)
    } else {
        Orientation::Normal
    };

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let oriented = apply_orientation(img, orientation);
    Ok(PixelBuffer::from_rgba_image(oriented.into_rgba8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply an EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ChannelLayout;
    use crate::encode::{encode_image, ImageFormat as OutputFormat};
    use crate::Color;

    /// Encode a small canvas to bytes in the given format to use as fixture.
    fn fixture_bytes(format: OutputFormat) -> Vec<u8> {
        let mut buf = PixelBuffer::blank(4, 3, Color::WHITE);
        buf.set_pixel(0, 0, Color::RED);
        encode_image(&buf, format).unwrap()
    }

    #[test]
    fn test_decode_png() {
        let bytes = fixture_bytes(OutputFormat::Png);
        let img = decode_image(&bytes).unwrap();

        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.layout, ChannelLayout::Rgba8);
        assert_eq!(img.get_pixel(0, 0), Some(Color::RED));
        assert_eq!(img.get_pixel(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_decode_bmp() {
        let bytes = fixture_bytes(OutputFormat::Bmp);
        let img = decode_image(&bytes).unwrap();

        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.get_pixel(0, 0), Some(Color::RED));
    }

    #[test]
    fn test_decode_jpeg() {
        let bytes = fixture_bytes(OutputFormat::Jpeg);
        let img = decode_image(&bytes).unwrap();

        // Lossy, so only check the shape
        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.layout, ChannelLayout::Rgba8);
    }

    #[test]
    fn test_decode_unrecognized_bytes() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        let result = decode_image(&[]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = fixture_bytes(OutputFormat::Png);
        let result = decode_image(&bytes[..20]);

        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_orientation_extraction_without_exif() {
        // Neither PNG fixtures nor garbage carry EXIF
        assert_eq!(
            extract_orientation(&fixture_bytes(OutputFormat::Png)),
            Orientation::Normal
        );
        assert_eq!(extract_orientation(&[0x00, 0x01]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb);

        let result = apply_orientation(img, Orientation::Rotate90CW);
        // Dimensions swap for a quarter turn
        assert_eq!(result.into_rgb8().dimensions(), (1, 2));
    }

    #[test]
    fn test_apply_orientation_rotate180() {
        let pixels = vec![
            255, 0, 0, // Red (left)
            0, 255, 0, // Green (right)
        ];
        let rgb = image::RgbImage::from_raw(2, 1, pixels).unwrap();
        let img = DynamicImage::ImageRgb8(rgb);

        let result = apply_orientation(img, Orientation::Rotate180).into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }
}
