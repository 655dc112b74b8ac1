//! Mirror flips along the horizontal or vertical axis.

use crate::buffer::PixelBuffer;

/// Axis to mirror the image across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

/// Mirror `image` along the given axis.
///
/// Dimensions and channel layout are unchanged. Flipping twice along the
/// same axis restores the original image.
pub fn flip(image: &PixelBuffer, axis: FlipAxis) -> PixelBuffer {
    let bpp = image.layout.bytes_per_pixel();
    let width = image.width as usize;
    let height = image.height as usize;
    let row_bytes = width * bpp;

    let mut output = vec![0u8; image.pixels.len()];

    match axis {
        FlipAxis::Horizontal => {
            for y in 0..height {
                let row = y * row_bytes;
                for x in 0..width {
                    let src = row + x * bpp;
                    let dst = row + (width - 1 - x) * bpp;
                    output[dst..dst + bpp].copy_from_slice(&image.pixels[src..src + bpp]);
                }
            }
        }
        FlipAxis::Vertical => {
            for y in 0..height {
                let src = y * row_bytes;
                let dst = (height - 1 - y) * row_bytes;
                output[dst..dst + row_bytes]
                    .copy_from_slice(&image.pixels[src..src + row_bytes]);
            }
        }
    }

    PixelBuffer {
        width: image.width,
        height: image.height,
        layout: image.layout,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::ChannelLayout;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=32, 1u32..=32).prop_flat_map(|(w, h)| {
            let len = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| PixelBuffer::new(w, h, ChannelLayout::Rgba8, pixels))
        })
    }

    proptest! {
        /// Property: Flipping twice along the same axis is the identity.
        #[test]
        fn prop_flip_is_involution(img in buffer_strategy()) {
            let twice_h = flip(&flip(&img, FlipAxis::Horizontal), FlipAxis::Horizontal);
            prop_assert_eq!(&twice_h, &img);

            let twice_v = flip(&flip(&img, FlipAxis::Vertical), FlipAxis::Vertical);
            prop_assert_eq!(&twice_v, &img);
        }

        /// Property: A flip permutes pixels without changing their multiset.
        #[test]
        fn prop_flip_preserves_pixel_population(img in buffer_strategy()) {
            let flipped = flip(&img, FlipAxis::Horizontal);

            let mut before: Vec<&[u8]> = img.pixels.chunks(4).collect();
            let mut after: Vec<&[u8]> = flipped.pixels.chunks(4).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
