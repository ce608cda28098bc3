//! Separable Gaussian blur for single-channel buffers
//!
//! The kernel is sized explicitly (odd, centered on the pixel) and its sigma
//! follows the automatic rule `0.3 * ((size - 1) * 0.5 - 1) + 0.8`. Borders
//! are extended with reflect-101 mirroring:
//!
//! ```text
//!     c b | a b c d | c b
//! ```
use image::{GrayImage, Luma};

use crate::error::{Result, TransformError};

/// Largest accepted kernel side length
pub const MAX_KERNEL_SIZE: u32 = 255;

/// Odd, positive side length of a square blur kernel, at most [`MAX_KERNEL_SIZE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlurKernelSize(u32);

impl BlurKernelSize {
    pub const DEFAULT: BlurKernelSize = BlurKernelSize(21);

    /// Validate a kernel size; zero and even sizes have no center pixel
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 || size % 2 == 0 || size > MAX_KERNEL_SIZE {
            return Err(TransformError::InvalidKernelSize(size));
        }
        Ok(Self(size))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of taps on each side of the center
    pub fn radius(self) -> usize {
        (self.0 / 2) as usize
    }

    /// Sigma derived from the kernel size
    pub fn auto_sigma(self) -> f32 {
        0.3 * ((self.0 as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

impl Default for BlurKernelSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for BlurKernelSize {
    type Error = TransformError;

    fn try_from(size: u32) -> Result<Self> {
        Self::new(size)
    }
}

/// Normalized 1D Gaussian weights for the given kernel size
pub fn gaussian_kernel(size: BlurKernelSize) -> Vec<f32> {
    let radius = size.radius() as i64;
    let sigma = size.auto_sigma();
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();

    let sum: f32 = kernel.iter().sum();
    for weight in &mut kernel {
        *weight /= sum;
    }

    kernel
}

/// Map an out-of-range coordinate back inside `0..len` by reflect-101
///
/// Works for any offset, including kernels wider than the image.
#[inline]
pub fn reflect_101(index: i64, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as i64 - 1);
    let folded = index.rem_euclid(period);
    if folded >= len as i64 {
        (period - folded) as usize
    } else {
        folded as usize
    }
}

/// Blur a grayscale image with a `size x size` Gaussian kernel
///
/// The horizontal pass keeps full `f32` precision; only the vertical pass
/// rounds back to 8 bits, so a constant field stays exactly constant.
pub fn gaussian_blur(img: &GrayImage, size: BlurKernelSize) -> GrayImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }

    let kernel = gaussian_kernel(size);
    let radius = size.radius() as i64;
    let w = width as usize;
    let h = height as usize;
    let src = img.as_raw();

    // Horizontal pass
    let mut horizontal = vec![0.0f32; w * h];
    for y in 0..h {
        let row = &src[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = reflect_101(x as i64 + k as i64 - radius, w);
                acc += row[sx] as f32 * weight;
            }
            horizontal[y * w + x] = acc;
        }
    }

    // Vertical pass
    let mut output = GrayImage::new(width, height);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = reflect_101(y as i64 + k as i64 - radius, h);
                acc += horizontal[sy * w + x] * weight;
            }
            let value = acc.round().clamp(0.0, 255.0) as u8;
            output.put_pixel(x as u32, y as u32, Luma([value]));
        }
    }

    output
}
