//! Pencil-sketch rendering via the blur-dodge technique
//!
//! The luma is inverted, blurred, inverted back and used as the divisor of the
//! original luma. Flat regions saturate to white while edges keep a soft
//! graphite-like shade.
use image::{DynamicImage, GrayImage, Luma, Rgb, Rgba};
use imageproc::map::{map_colors, map_colors2};

use super::blur::{gaussian_blur, BlurKernelSize};
use super::grayscale::decompose;
use crate::error::{Result, TransformError};

/// Scale applied to the dodge quotient
const DODGE_SCALE: u32 = 256;

/// Render a pencil sketch of `image`
///
/// Output keeps the source layout: Luma8 stays Luma8, Rgb8 becomes neutral
/// gray Rgb8, and Rgba8 becomes gray Rgba8 with the original alpha.
pub fn to_sketch(image: &DynamicImage, blur_size: BlurKernelSize) -> Result<DynamicImage> {
    let decomposed = decompose(image)?;
    let sketch = dodge_sketch(&decomposed.luma, blur_size);

    match (decomposed.channels, decomposed.alpha) {
        (1, None) => Ok(DynamicImage::ImageLuma8(sketch)),
        (3, None) => Ok(DynamicImage::ImageRgb8(map_colors(&sketch, |s: Luma<u8>| {
            Rgb([s[0], s[0], s[0]])
        }))),
        (4, Some(alpha)) => Ok(DynamicImage::ImageRgba8(map_colors2(
            &sketch,
            &alpha,
            |s: Luma<u8>, a: Luma<u8>| Rgba([s[0], s[0], s[0], a[0]]),
        ))),
        _ => Err(TransformError::UnsupportedFormat {
            color_type: image.color(),
        }),
    }
}

/// Blur-dodge a luma buffer into a sketch buffer
pub fn dodge_sketch(luma: &GrayImage, blur_size: BlurKernelSize) -> GrayImage {
    let inverted = invert(luma);
    let blurred = gaussian_blur(&inverted, blur_size);
    let inverted_blurred = invert(&blurred);

    map_colors2(luma, &inverted_blurred, |l: Luma<u8>, d: Luma<u8>| {
        Luma([dodge(l[0], d[0])])
    })
}

/// Scaled division of a luma sample by its inverted-blurred counterpart
///
/// A zero divisor is treated as 1. The quotient is rounded to nearest and
/// saturated to 255.
#[inline]
pub fn dodge(luma: u8, inverted_blurred: u8) -> u8 {
    let divisor = (inverted_blurred as u32).max(1);
    let quotient = (luma as u32 * DODGE_SCALE + divisor / 2) / divisor;
    quotient.min(255) as u8
}

fn invert(img: &GrayImage) -> GrayImage {
    map_colors(img, |p: Luma<u8>| Luma([255 - p[0]]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{RgbImage, RgbaImage};

    fn uniform(width: u32, height: u32, value: u8) -> GrayImage {
        GrayImage::from_pixel(width, height, Luma([value]))
    }

    #[test]
    fn test_dodge_guards_zero_divisor() {
        assert_eq!(dodge(0, 0), 0);
        assert_eq!(dodge(1, 0), 255);
        assert_eq!(dodge(255, 0), 255);
    }

    #[test]
    fn test_dodge_values() {
        // Equal luma and divisor saturates (256 / 1 scale)
        assert_eq!(dodge(100, 100), 255);
        // 100 * 256 / 200 = 128
        assert_eq!(dodge(100, 200), 128);
        // 10 * 256 / 255 = 10.04 -> 10
        assert_eq!(dodge(10, 255), 10);
        // 1 * 256 / 255 rounds to 1
        assert_eq!(dodge(1, 255), 1);
        assert_eq!(dodge(0, 255), 0);
    }

    #[test]
    fn test_uniform_field_saturates() {
        for value in [1u8, 64, 128, 254, 255] {
            let sketch = dodge_sketch(&uniform(8, 6, value), BlurKernelSize::DEFAULT);
            assert!(sketch.pixels().all(|p| p[0] == 255), "value {}", value);
        }

        let black = dodge_sketch(&uniform(8, 6, 0), BlurKernelSize::DEFAULT);
        assert!(black.pixels().all(|p| p[0] == 0));
    }

    #[test]
    fn test_sketch_preserves_layout() {
        let gray = DynamicImage::new_luma8(5, 4);
        let out = to_sketch(&gray, BlurKernelSize::DEFAULT).unwrap();
        assert!(matches!(out, DynamicImage::ImageLuma8(_)));
        assert_eq!((out.width(), out.height()), (5, 4));

        let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 4, Rgb([30, 60, 90])));
        let out = to_sketch(&rgb, BlurKernelSize::DEFAULT).unwrap();
        assert!(matches!(out, DynamicImage::ImageRgb8(_)));

        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(5, 4, Rgba([30, 60, 90, 77])));
        let out = to_sketch(&rgba, BlurKernelSize::DEFAULT).unwrap();
        let out = out.as_rgba8().unwrap();
        assert!(out.pixels().all(|p| p[3] == 77));
        assert!(out.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn test_sketch_rejects_luma_alpha() {
        let la = DynamicImage::new_luma_a8(3, 3);
        assert!(matches!(
            to_sketch(&la, BlurKernelSize::DEFAULT).unwrap_err(),
            TransformError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn test_isolated_bright_pixel_clamps() {
        // A lone white pixel on black: its inverted-blurred divisor is tiny,
        // so the quotient must saturate instead of overflowing.
        let mut luma = GrayImage::new(9, 9);
        luma.put_pixel(4, 4, Luma([255]));

        let sketch = dodge_sketch(&luma, BlurKernelSize::new(5).unwrap());
        assert_eq!(sketch.get_pixel(4, 4)[0], 255);
        assert_eq!(sketch.get_pixel(0, 0)[0], 0);
    }
}
