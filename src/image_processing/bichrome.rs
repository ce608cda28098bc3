//! Two-color conversion for transparent assets
//!
//! Every pixel becomes either black or the accent color depending on its luma,
//! while the alpha channel is carried over untouched.
use image::{DynamicImage, Luma, RgbaImage};
use imageproc::map::map_colors2;

use super::color::Color;
use super::grayscale::decompose;
use crate::error::{Result, TransformError};

/// Default luma cut point between the dark and light classes
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Convert a transparent image to black and `accent`
///
/// Luma strictly greater than `threshold` takes the accent color, anything at
/// or below it becomes black. The source must be 8-bit RGBA; 1- and 3-channel
/// sources fail with [`TransformError::MissingAlphaChannel`].
pub fn to_bichrome(image: &DynamicImage, accent: Color, threshold: u8) -> Result<RgbaImage> {
    match image {
        DynamicImage::ImageRgba8(_) => {}
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) => {
            return Err(TransformError::MissingAlphaChannel)
        }
        other => {
            return Err(TransformError::UnsupportedFormat {
                color_type: other.color(),
            })
        }
    }

    let decomposed = decompose(image)?;
    let alpha = decomposed.alpha.ok_or(TransformError::MissingAlphaChannel)?;

    Ok(map_colors2(&decomposed.luma, &alpha, |luma: Luma<u8>, alpha: Luma<u8>| {
        classify(luma[0], threshold, accent).with_alpha(alpha[0])
    }))
}

/// Pick the output color for a luma sample
#[inline]
pub fn classify(luma: u8, threshold: u8, accent: Color) -> Color {
    if luma > threshold {
        accent
    } else {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage, Rgba};

    const GREEN: Color = Color::new(0, 255, 0);

    #[test]
    fn test_classify_tie_goes_dark() {
        assert_eq!(classify(127, 127, GREEN), Color::BLACK);
        assert_eq!(classify(128, 127, GREEN), GREEN);
        assert_eq!(classify(0, 0, GREEN), Color::BLACK);
        assert_eq!(classify(255, 255, GREEN), Color::BLACK);
        assert_eq!(classify(1, 0, GREEN), GREEN);
    }

    #[test]
    fn test_bichrome_example_pixels() {
        let lumas = [100u8, 150, 200, 250];
        let alphas = [255u8, 128, 0, 64];
        let img: RgbaImage = ImageBuffer::from_fn(2, 2, |x, y| {
            let i = (y * 2 + x) as usize;
            Rgba([lumas[i], lumas[i], lumas[i], alphas[i]])
        });

        let result = to_bichrome(&DynamicImage::ImageRgba8(img), GREEN, DEFAULT_THRESHOLD).unwrap();

        assert_eq!(*result.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*result.get_pixel(1, 0), Rgba([0, 255, 0, 128]));
        assert_eq!(*result.get_pixel(0, 1), Rgba([0, 255, 0, 0]));
        assert_eq!(*result.get_pixel(1, 1), Rgba([0, 255, 0, 64]));
    }

    #[test]
    fn test_bichrome_rejects_opaque_sources() {
        let rgb: RgbImage = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));
        assert_eq!(
            to_bichrome(&DynamicImage::ImageRgb8(rgb), GREEN, 127).unwrap_err(),
            TransformError::MissingAlphaChannel
        );

        let gray = DynamicImage::new_luma8(2, 2);
        assert_eq!(
            to_bichrome(&gray, GREEN, 127).unwrap_err(),
            TransformError::MissingAlphaChannel
        );
    }

    #[test]
    fn test_bichrome_rejects_deep_rgba() {
        let deep = DynamicImage::new_rgba16(2, 2);
        assert!(matches!(
            to_bichrome(&deep, GREEN, 127).unwrap_err(),
            TransformError::UnsupportedFormat { .. }
        ));
    }

    #[test]
    fn test_threshold_extremes() {
        let img: RgbaImage = ImageBuffer::from_fn(16, 16, |x, y| {
            let v = (y * 16 + x) as u8;
            Rgba([v, v, v, 255])
        });
        let source = DynamicImage::ImageRgba8(img);

        // Threshold 255: nothing is strictly brighter
        let all_dark = to_bichrome(&source, GREEN, 255).unwrap();
        assert!(all_dark.pixels().all(|p| p.0[..3] == [0, 0, 0]));

        // Threshold 0: only pure black stays dark
        let mostly_light = to_bichrome(&source, GREEN, 0).unwrap();
        assert_eq!(*mostly_light.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(mostly_light.pixels().filter(|p| p[1] == 255).count(), 255);
    }
}
