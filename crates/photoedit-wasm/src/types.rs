//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! PhotoEdit types, handling the conversion between Rust and JavaScript data
//! representations.

use photoedit_core::{ChannelLayout, PixelBuffer};
use wasm_bindgen::prelude::*;

/// A pixel buffer wrapper for JavaScript.
///
/// Wraps the engine's buffer type and provides a JavaScript-friendly
/// interface for reading dimensions and pixel data, typically to blit the
/// image into a canvas element.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    grayscale: bool,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            grayscale: false,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the buffer is single-channel grayscale (1 byte per pixel)
    /// rather than RGBA (4 bytes per pixel)
    #[wasm_bindgen(getter)]
    pub fn grayscale(&self) -> bool {
        self.grayscale
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the pixel data as a Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data, which is necessary for
    /// safe memory management across the WASM boundary.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Create a JsPixelBuffer from a core buffer.
    pub(crate) fn from_buffer(buffer: &PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            grayscale: buffer.layout == ChannelLayout::Gray8,
            pixels: buffer.pixels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photoedit_core::Color;

    #[test]
    fn test_js_pixel_buffer_creation() {
        let img = JsPixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 4]);

        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert!(!img.grayscale());
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_pixel_buffer_pixels_copy() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8, 4, 2]; // 2 RGBA pixels
        let img = JsPixelBuffer::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_rgba_buffer() {
        let buffer = PixelBuffer::blank(20, 10, Color::WHITE);
        let js = JsPixelBuffer::from_buffer(&buffer);

        assert_eq!(js.width(), 20);
        assert_eq!(js.height(), 10);
        assert!(!js.grayscale());
        assert_eq!(js.byte_length(), 20 * 10 * 4);
    }

    #[test]
    fn test_from_gray_buffer() {
        let buffer = photoedit_core::grayscale(&PixelBuffer::blank(4, 4, Color::WHITE));
        let js = JsPixelBuffer::from_buffer(&buffer);

        assert!(js.grayscale());
        assert_eq!(js.byte_length(), 16);
    }
}
