//! Luma extraction shared by the bichrome and sketch transforms
//!
//! Both transforms derive brightness through the fixed weights below.
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, RgbaImage};

use crate::error::{Result, TransformError};

/// BT.601 luma weights (0.299, 0.587, 0.114) in Q14 fixed point
///
/// The three weights add up to exactly `1 << 14`, so a neutral pixel (v, v, v)
/// always maps back to v.
pub const LUMA_WEIGHTS_Q14: [u32; 3] = [4899, 9617, 1868];

const LUMA_SHIFT: u32 = 14;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// Grayscale view of a decoded image with its alpha split off
#[derive(Debug, Clone)]
pub struct Decomposed {
    /// Single-channel brightness
    pub luma: GrayImage,
    /// Opacity plane, present only for 4-channel sources
    pub alpha: Option<GrayImage>,
    /// Channel count of the source buffer (1, 3 or 4)
    pub channels: u8,
}

/// Compute the luma of a single RGB sample
#[inline]
pub fn luma_of(r: u8, g: u8, b: u8) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS_Q14;
    let weighted = wr * r as u32 + wg * g as u32 + wb * b as u32;
    ((weighted + LUMA_ROUND) >> LUMA_SHIFT) as u8
}

/// Derive a single-channel luma buffer
///
/// 1-channel input is passed through unchanged; RGB and RGBA are weighted with
/// [`LUMA_WEIGHTS_Q14`] (alpha is ignored). Anything else is rejected.
pub fn to_grayscale(image: &DynamicImage) -> Result<GrayImage> {
    decompose(image).map(|decomposed| decomposed.luma)
}

/// Derive luma and split off the alpha channel in one pass over the formats
pub fn decompose(image: &DynamicImage) -> Result<Decomposed> {
    match image {
        DynamicImage::ImageLuma8(gray) => Ok(Decomposed {
            luma: gray.clone(),
            alpha: None,
            channels: 1,
        }),
        DynamicImage::ImageRgb8(rgb) => Ok(Decomposed {
            luma: rgb_luma(rgb),
            alpha: None,
            channels: 3,
        }),
        DynamicImage::ImageRgba8(rgba) => {
            let (luma, alpha) = rgba_luma_and_alpha(rgba);
            Ok(Decomposed {
                luma,
                alpha: Some(alpha),
                channels: 4,
            })
        }
        other => Err(TransformError::UnsupportedFormat {
            color_type: other.color(),
        }),
    }
}

fn rgb_luma(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut luma = GrayImage::new(width, height);

    for (x, y, Rgb([r, g, b])) in img.enumerate_pixels() {
        luma.put_pixel(x, y, Luma([luma_of(*r, *g, *b)]));
    }

    luma
}

fn rgba_luma_and_alpha(img: &RgbaImage) -> (GrayImage, GrayImage) {
    let (width, height) = img.dimensions();
    let mut luma = GrayImage::new(width, height);
    let mut alpha = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        luma.put_pixel(x, y, Luma([luma_of(pixel[0], pixel[1], pixel[2])]));
        alpha.put_pixel(x, y, Luma([pixel[3]]));
    }

    (luma, alpha)
}
