//! Error types for the pixel transforms

use image::ColorType;
use thiserror::Error;

/// Result type alias for transform operations
pub type Result<T> = std::result::Result<T, TransformError>;

/// Validation failures raised before any pixel is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Pixel layout is not 8-bit luma, RGB or RGBA
    #[error("Unsupported pixel format: {color_type:?} ({} channels)", .color_type.channel_count())]
    UnsupportedFormat { color_type: ColorType },

    /// Bichrome conversion needs a transparent source
    #[error("The input image must have an alpha channel (be transparent)")]
    MissingAlphaChannel,

    /// Blur kernel must be centered on the pixel and no wider than 255
    #[error("Invalid blur kernel size: {0} (must be an odd number from 1 to 255)")]
    InvalidKernelSize(u32),
}

impl TransformError {
    /// Get user-friendly error description for the command-line shell
    pub fn user_message(&self) -> String {
        match self {
            TransformError::UnsupportedFormat { color_type } => format!(
                "The selected image format is not recognized ({} channels). Use a grayscale, RGB or RGBA image.",
                color_type.channel_count()
            ),
            TransformError::MissingAlphaChannel => {
                "The selected image has no transparency. Bichrome conversion needs a PNG with an alpha channel.".to_string()
            }
            TransformError::InvalidKernelSize(size) => format!(
                "Blur size {} is not usable. Pick an odd number from 1 to 255, such as 21.",
                size
            ),
        }
    }
}
