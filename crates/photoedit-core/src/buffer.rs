//! The in-memory pixel buffer holding the current image.
//!
//! `PixelBuffer` is the single source of truth for the image being edited.
//! Editing operations never mutate a buffer that is visible elsewhere; they
//! produce a new owned buffer which the session installs wholesale, so a
//! half-applied operation can never be observed.

use crate::luminance::luminance_u8;
use crate::Color;

/// Channel layout of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ChannelLayout {
    /// 8-bit RGBA, 4 bytes per pixel.
    #[default]
    Rgba8,
    /// 8-bit grayscale, 1 byte per pixel.
    Gray8,
}

impl ChannelLayout {
    /// Number of bytes used to store one pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            ChannelLayout::Rgba8 => 4,
            ChannelLayout::Gray8 => 1,
        }
    }
}

/// A raster image with interleaved pixel data in row-major order.
///
/// Invariant: `pixels.len() == width * height * layout.bytes_per_pixel()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// How the bytes in `pixels` are interpreted.
    pub layout: ChannelLayout,
    /// Interleaved pixel data, `layout.bytes_per_pixel()` bytes per pixel.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer from dimensions, layout and pixel data.
    pub fn new(width: u32, height: u32, layout: ChannelLayout, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * layout.bytes_per_pixel(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            layout,
            pixels,
        }
    }

    /// Create a blank RGBA canvas filled with a single color.
    pub fn blank(width: u32, height: u32, fill: Color) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self {
            width,
            height,
            layout: ChannelLayout::Rgba8,
            pixels,
        }
    }

    /// Byte offset of the pixel at (x, y), or None when out of range.
    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        Some(idx * self.layout.bytes_per_pixel())
    }

    /// Read the pixel at (x, y).
    ///
    /// Returns None for out-of-range coordinates. Grayscale pixels are
    /// expanded to an opaque gray color.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.offset(x, y)?;
        match self.layout {
            ChannelLayout::Rgba8 => Some(Color::rgba(
                self.pixels[i],
                self.pixels[i + 1],
                self.pixels[i + 2],
                self.pixels[i + 3],
            )),
            ChannelLayout::Gray8 => {
                let v = self.pixels[i];
                Some(Color::rgb(v, v, v))
            }
        }
    }

    /// Write the pixel at (x, y).
    ///
    /// Out-of-range coordinates are a no-op rather than an error; stroke
    /// rasterization may walk slightly outside the canvas due to rounding.
    /// On grayscale buffers the color's BT.601 luminance is stored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(i) = self.offset(x, y) else {
            return;
        };
        match self.layout {
            ChannelLayout::Rgba8 => {
                self.pixels[i] = color.r;
                self.pixels[i + 1] = color.g;
                self.pixels[i + 2] = color.b;
                self.pixels[i + 3] = color.a;
            }
            ChannelLayout::Gray8 => {
                self.pixels[i] = luminance_u8(color.r, color.g, color.b);
            }
        }
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel data in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Create a PixelBuffer from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Rgba8,
            pixels: img.into_raw(),
        }
    }

    /// Create a PixelBuffer from an image::GrayImage.
    pub fn from_gray_image(img: image::GrayImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            layout: ChannelLayout::Gray8,
            pixels: img.into_raw(),
        }
    }

    /// Convert to an image::RgbaImage. Only valid for RGBA buffers.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        match self.layout {
            ChannelLayout::Rgba8 => {
                image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            ChannelLayout::Gray8 => None,
        }
    }

    /// Convert to an image::GrayImage. Only valid for grayscale buffers.
    pub fn to_gray_image(&self) -> Option<image::GrayImage> {
        match self.layout {
            ChannelLayout::Gray8 => {
                image::GrayImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            ChannelLayout::Rgba8 => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_canvas_is_white() {
        let buf = PixelBuffer::blank(4, 3, Color::WHITE);

        assert_eq!(buf.width, 4);
        assert_eq!(buf.height, 3);
        assert_eq!(buf.layout, ChannelLayout::Rgba8);
        assert_eq!(buf.byte_size(), 4 * 3 * 4);
        assert!(buf.pixels.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut buf = PixelBuffer::blank(8, 8, Color::WHITE);
        let color = Color::rgba(12, 34, 56, 200);

        buf.set_pixel(3, 5, color);
        assert_eq!(buf.get_pixel(3, 5), Some(color));
        // Neighbors untouched
        assert_eq!(buf.get_pixel(2, 5), Some(Color::WHITE));
        assert_eq!(buf.get_pixel(3, 4), Some(Color::WHITE));
    }

    #[test]
    fn test_out_of_range_access_is_harmless() {
        let mut buf = PixelBuffer::blank(4, 4, Color::WHITE);
        let before = buf.clone();

        buf.set_pixel(-1, 0, Color::RED);
        buf.set_pixel(0, -1, Color::RED);
        buf.set_pixel(4, 0, Color::RED);
        buf.set_pixel(0, 4, Color::RED);

        assert_eq!(buf, before);
        assert_eq!(buf.get_pixel(-1, 0), None);
        assert_eq!(buf.get_pixel(4, 4), None);
    }

    #[test]
    fn test_gray_write_stores_luminance() {
        let mut buf = PixelBuffer::new(2, 2, ChannelLayout::Gray8, vec![0; 4]);

        buf.set_pixel(0, 0, Color::RED);
        // BT.601 luminance of pure red
        assert_eq!(buf.pixels[0], 76);
        assert_eq!(buf.get_pixel(0, 0), Some(Color::rgb(76, 76, 76)));
    }

    #[test]
    fn test_counts() {
        let buf = PixelBuffer::blank(100, 50, Color::BLACK);
        assert_eq!(buf.pixel_count(), 5000);
        assert_eq!(buf.byte_size(), 20000);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_empty_buffer() {
        let buf = PixelBuffer::new(0, 0, ChannelLayout::Rgba8, vec![]);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_rgba_image_conversions() {
        let buf = PixelBuffer::blank(5, 4, Color::rgb(10, 20, 30));
        let img = buf.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (5, 4));

        let back = PixelBuffer::from_rgba_image(img);
        assert_eq!(back, buf);
    }

    #[test]
    fn test_layout_conversion_mismatch() {
        let gray = PixelBuffer::new(2, 2, ChannelLayout::Gray8, vec![7; 4]);
        assert!(gray.to_rgba_image().is_none());
        assert!(gray.to_gray_image().is_some());

        let rgba = PixelBuffer::blank(2, 2, Color::WHITE);
        assert!(rgba.to_gray_image().is_none());
    }
}
