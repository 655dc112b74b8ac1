//! Grayscale conversion.

use crate::buffer::{ChannelLayout, PixelBuffer};
use crate::luminance::luminance_u8;

/// Convert `image` to single-channel grayscale.
///
/// Each pixel becomes its ITU-R BT.601 luminance; the alpha channel is
/// dropped. The output layout is `Gray8` with one byte per pixel. An image
/// that is already grayscale is returned as a copy.
pub fn grayscale(image: &PixelBuffer) -> PixelBuffer {
    if image.layout == ChannelLayout::Gray8 {
        return image.clone();
    }

    let mut output = Vec::with_capacity(image.pixel_count() as usize);
    for px in image.pixels.chunks_exact(4) {
        output.push(luminance_u8(px[0], px[1], px[2]));
    }

    PixelBuffer {
        width: image.width,
        height: image.height,
        layout: ChannelLayout::Gray8,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=32, 1u32..=32).prop_flat_map(|(w, h)| {
            let len = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| PixelBuffer::new(w, h, ChannelLayout::Rgba8, pixels))
        })
    }

    proptest! {
        /// Property: Output is always Gray8 with one byte per source pixel.
        #[test]
        fn prop_grayscale_output_shape(img in buffer_strategy()) {
            let result = grayscale(&img);

            prop_assert_eq!(result.layout, ChannelLayout::Gray8);
            prop_assert_eq!(result.pixels.len(), img.pixel_count() as usize);
        }

        /// Property: Each output value lies between the min and max of its
        /// source channels (a weighted average cannot escape that range).
        #[test]
        fn prop_grayscale_bounded_by_channels(img in buffer_strategy()) {
            let result = grayscale(&img);

            for (px, &gray) in img.pixels.chunks_exact(4).zip(result.pixels.iter()) {
                let lo = px[0].min(px[1]).min(px[2]);
                let hi = px[0].max(px[1]).max(px[2]);
                prop_assert!(gray >= lo.saturating_sub(1));
                prop_assert!(gray <= hi.saturating_add(1));
            }
        }
    }
}
