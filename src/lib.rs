//! # Picture Stylizer
//!
//! Pixel transforms that turn a decoded image into a stylized derivative:
//! - **Bichrome**: black plus an accent color, with the source alpha preserved
//! - **Sketch**: pencil-style rendering via invert, blur, invert and divide
//!
//! ## Example
//!
//! ```rust,no_run
//! use picture_stylizer::{to_bichrome, to_sketch, BlurKernelSize, Color, DEFAULT_THRESHOLD};
//!
//! let img = image::open("logo.png")?;
//! let bichrome = to_bichrome(&img, Color::new(0, 255, 0), DEFAULT_THRESHOLD)?;
//! let sketch = to_sketch(&img, BlurKernelSize::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Library exports for reuse by the CLI and other applications
pub mod cli;
pub mod config_file;
pub mod error;
pub mod image_processing;
pub mod json_output;
pub mod utils;

// Re-export commonly used types
pub use error::{Result, TransformError};
pub use image_processing::bichrome::{to_bichrome, DEFAULT_THRESHOLD};
pub use image_processing::blur::{BlurKernelSize, MAX_KERNEL_SIZE};
pub use image_processing::color::Color;
pub use image_processing::grayscale::{decompose, to_grayscale, Decomposed, LUMA_WEIGHTS_Q14};
pub use image_processing::sketch::to_sketch;
pub use image_processing::{StylizeConfig, StylizeEngine, StylizeResult, TransformKind};
pub use json_output::JsonMessage;
