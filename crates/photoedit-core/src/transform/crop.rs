//! Image cropping.
//!
//! Cropping takes a pixel-coordinate rectangle (normally the committed crop
//! selection) and copies that region into a new buffer. The rectangle is
//! clamped to the image bounds rather than rejected, so a selection dragged
//! partially off the canvas simply crops to the overlapping part.

use crate::buffer::PixelBuffer;
use crate::Rect;

/// Copy the region of `image` covered by `rect` into a new buffer.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `rect` - Crop region in pixel coordinates, already normalized
///
/// # Behavior
///
/// - The rectangle is clamped to the image bounds
/// - The output is never smaller than 1x1 pixels, even for a rectangle
///   lying entirely outside the image
/// - The channel layout is preserved
pub fn crop(image: &PixelBuffer, rect: Rect) -> PixelBuffer {
    let bpp = image.layout.bytes_per_pixel();

    // Clamp the origin into the image, then the far edge to the image size
    let left = rect.x.clamp(0, image.width.saturating_sub(1) as i32) as u32;
    let top = rect.y.clamp(0, image.height.saturating_sub(1) as i32) as u32;
    let right = rect
        .x
        .saturating_add(rect.width as i32)
        .clamp(0, image.width as i32) as u32;
    let bottom = rect
        .y
        .saturating_add(rect.height as i32)
        .clamp(0, image.height as i32) as u32;

    let out_width = right.saturating_sub(left).max(1);
    let out_height = bottom.saturating_sub(top).max(1);

    let mut output = vec![0u8; out_width as usize * out_height as usize * bpp];

    // Copy row by row; rows are contiguous in both buffers
    for y in 0..out_height {
        let src_y = (top + y).min(image.height - 1);
        let src_start = (src_y as usize * image.width as usize + left as usize) * bpp;
        let dst_start = y as usize * out_width as usize * bpp;
        let row_bytes = out_width as usize * bpp;

        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    PixelBuffer {
        width: out_width,
        height: out_height,
        layout: image.layout,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
