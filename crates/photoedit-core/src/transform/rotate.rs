//! Quarter-turn rotation.
//!
//! Only exact 90-degree turns are supported, so rotation is a pure index
//! permutation with no resampling. Width and height swap, and a left turn
//! followed by a right turn restores the original image exactly.

use crate::buffer::PixelBuffer;

/// Direction of a quarter-turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Rotation {
    /// 90 degrees counter-clockwise.
    Ccw90,
    /// 90 degrees clockwise.
    Cw90,
}

/// Rotate `image` by a quarter turn.
///
/// The output has the source's width and height swapped. For `Ccw90` the
/// source pixel (x, y) lands at (y, width-1-x); `Cw90` is the exact inverse,
/// so the two directions round-trip to the identity.
pub fn rotate(image: &PixelBuffer, direction: Rotation) -> PixelBuffer {
    let bpp = image.layout.bytes_per_pixel();
    let src_w = image.width as usize;
    let src_h = image.height as usize;
    let dst_w = src_h;
    let dst_h = src_w;

    let mut output = vec![0u8; image.pixels.len()];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Inverse mapping: where in the source does this pixel come from
            let (src_x, src_y) = match direction {
                Rotation::Ccw90 => (src_w - 1 - dst_y, dst_x),
                Rotation::Cw90 => (dst_y, src_h - 1 - dst_x),
            };

            let src = (src_y * src_w + src_x) * bpp;
            let dst = (dst_y * dst_w + dst_x) * bpp;
            output[dst..dst + bpp].copy_from_slice(&image.pixels[src..src + bpp]);
        }
    }

    PixelBuffer {
        width: dst_w as u32,
        height: dst_h as u32,
        layout: image.layout,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    const GREEN: Color = Color::rgb(0, 255, 0);

    /// A 2x1 strip: red on the left, green on the right.
    fn strip() -> PixelBuffer {
        let mut buf = PixelBuffer::blank(2, 1, Color::WHITE);
        buf.set_pixel(0, 0, Color::RED);
        buf.set_pixel(1, 0, GREEN);
        buf
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let img = PixelBuffer::blank(30, 20, Color::WHITE);

        let left = rotate(&img, Rotation::Ccw90);
        assert_eq!((left.width, left.height), (20, 30));

        let right = rotate(&img, Rotation::Cw90);
        assert_eq!((right.width, right.height), (20, 30));
    }

    #[test]
    fn test_rotate_ccw_corner_mapping() {
        // Counter-clockwise: the left end of the strip swings to the bottom
        let result = rotate(&strip(), Rotation::Ccw90);

        assert_eq!((result.width, result.height), (1, 2));
        assert_eq!(result.get_pixel(0, 0), Some(GREEN));
        assert_eq!(result.get_pixel(0, 1), Some(Color::RED));
    }

    #[test]
    fn test_rotate_cw_corner_mapping() {
        // Clockwise: the left end of the strip swings to the top
        let result = rotate(&strip(), Rotation::Cw90);

        assert_eq!((result.width, result.height), (1, 2));
        assert_eq!(result.get_pixel(0, 0), Some(Color::RED));
        assert_eq!(result.get_pixel(0, 1), Some(GREEN));
    }

    #[test]
    fn test_rotate_round_trip_is_identity() {
        let mut img = PixelBuffer::blank(4, 3, Color::WHITE);
        img.set_pixel(1, 2, Color::RED);
        img.set_pixel(3, 0, GREEN);

        let there_and_back = rotate(&rotate(&img, Rotation::Ccw90), Rotation::Cw90);
        assert_eq!(there_and_back, img);

        let other_way = rotate(&rotate(&img, Rotation::Cw90), Rotation::Ccw90);
        assert_eq!(other_way, img);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
