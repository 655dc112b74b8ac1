//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! Shared by the grayscale conversion and by pixel writes into grayscale
//! buffers, so that both agree on what "the gray value of a color" means.

/// ITU-R BT.601 coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luminance value (0-255), rounded to the nearest integer.
#[inline]
pub fn luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINANCE_R + LUMINANCE_G + LUMINANCE_B;
        assert!((sum - 1.0).abs() < 1e-6, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(luminance_u8(255, 255, 255), 255);
        assert_eq!(luminance_u8(0, 0, 0), 0);
    }

    #[test]
    fn test_luminance_gray_preserves_value() {
        // For gray (r=g=b), luminance should equal that gray value
        for v in [0u8, 64, 128, 192, 255] {
            let lum = luminance_u8(v, v, v);
            assert!(
                (lum as i32 - v as i32).abs() <= 1,
                "Gray {} should produce luminance ~{}, got {}",
                v,
                v,
                lum
            );
        }
    }

    #[test]
    fn test_luminance_pure_red() {
        // 0.299 * 255 = 76.245, rounds to 76
        assert_eq!(luminance_u8(255, 0, 0), 76);
    }

    #[test]
    fn test_luminance_pure_green() {
        // 0.587 * 255 = 149.685, rounds to 150
        assert_eq!(luminance_u8(0, 255, 0), 150);
    }

    #[test]
    fn test_luminance_pure_blue() {
        // 0.114 * 255 = 29.07, rounds to 29
        assert_eq!(luminance_u8(0, 0, 255), 29);
    }
}
