//! Uniform scaling (zoom).
//!
//! Resampling policy: bilinear interpolation, center-aligned, with edge
//! clamping. The policy is fixed so that repeated zooms are reproducible
//! across platforms.

use crate::buffer::PixelBuffer;

/// Scale `image` uniformly by `factor`.
///
/// # Arguments
///
/// * `image` - Source image
/// * `factor` - Scale factor, must be positive; 1.0 is the identity
///
/// # Behavior
///
/// - New dimensions are `round(width * factor)` by `round(height * factor)`,
///   each at least 1 pixel, preserving aspect ratio up to rounding
/// - Pixels are sampled with bilinear interpolation; coordinates outside the
///   source are clamped to the edge
/// - The channel layout is preserved
pub fn scale(image: &PixelBuffer, factor: f64) -> PixelBuffer {
    debug_assert!(factor > 0.0, "scale factor must be positive");

    let new_w = ((image.width as f64 * factor).round() as u32).max(1);
    let new_h = ((image.height as f64 * factor).round() as u32).max(1);

    resample_bilinear(image, new_w, new_h)
}

/// Resample `image` to exact dimensions with bilinear interpolation.
fn resample_bilinear(image: &PixelBuffer, new_w: u32, new_h: u32) -> PixelBuffer {
    // Fast path: nothing to do
    if new_w == image.width && new_h == image.height {
        return image.clone();
    }

    let bpp = image.layout.bytes_per_pixel();
    let src_w = image.width as usize;
    let src_h = image.height as usize;
    let x_ratio = image.width as f64 / new_w as f64;
    let y_ratio = image.height as f64 / new_h as f64;

    let mut output = vec![0u8; new_w as usize * new_h as usize * bpp];

    for dy in 0..new_h as usize {
        // Center-aligned source coordinate, clamped to the image
        let sy = ((dy as f64 + 0.5) * y_ratio - 0.5).clamp(0.0, (src_h - 1) as f64);
        let y0 = sy.floor() as usize;
        let y1 = (y0 + 1).min(src_h - 1);
        let ty = sy - y0 as f64;

        for dx in 0..new_w as usize {
            let sx = ((dx as f64 + 0.5) * x_ratio - 0.5).clamp(0.0, (src_w - 1) as f64);
            let x0 = sx.floor() as usize;
            let x1 = (x0 + 1).min(src_w - 1);
            let tx = sx - x0 as f64;

            let dst = (dy * new_w as usize + dx) * bpp;
            for c in 0..bpp {
                let p00 = image.pixels[(y0 * src_w + x0) * bpp + c] as f64;
                let p01 = image.pixels[(y0 * src_w + x1) * bpp + c] as f64;
                let p10 = image.pixels[(y1 * src_w + x0) * bpp + c] as f64;
                let p11 = image.pixels[(y1 * src_w + x1) * bpp + c] as f64;

                let top = p00 + (p01 - p00) * tx;
                let bottom = p10 + (p11 - p10) * tx;
                let value = top + (bottom - top) * ty;

                output[dst + c] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    PixelBuffer {
        width: new_w,
        height: new_h,
        layout: image.layout,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
