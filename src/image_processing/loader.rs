use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::Path;

/// Load and decode an image file into one of the 8-bit layouts the transforms accept
///
/// Missing files and undecodable data are reported as separate errors so the
/// shell can tell the user which one happened.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "The file {} does not exist.",
            path.display()
        ));
    }

    let img = image::open(path).with_context(|| {
        format!(
            "Unable to read the image {}. Check the file format.",
            path.display()
        )
    })?;

    Ok(normalize_decoded(img))
}

/// Reduce a decoded image to Luma8, Rgb8 or Rgba8
///
/// Deeper bit depths are narrowed to 8 bits. Gray+alpha is widened to RGBA so
/// the transparency survives, matching how common decoders expose such PNGs.
pub fn normalize_decoded(img: DynamicImage) -> DynamicImage {
    match img {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => {
            img
        }
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(img.to_luma8()),
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb8(img.to_rgb8())
        }
        _ => {
            if img.color().has_alpha() {
                DynamicImage::ImageRgba8(img.to_rgba8())
            } else {
                DynamicImage::ImageRgb8(img.to_rgb8())
            }
        }
    }
}
