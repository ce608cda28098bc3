pub mod bichrome;
pub mod blur;
pub mod color;
pub mod grayscale;
pub mod loader;
pub mod sketch;

use anyhow::{Context, Result};
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::utils::{create_output_path, verbose_println};
use blur::BlurKernelSize;
use color::Color;

/// Which stylization to run, with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum TransformKind {
    Bichrome { accent: Color, threshold: u8 },
    Sketch { blur_size: BlurKernelSize },
}

impl TransformKind {
    /// Suffix inserted before the extension of the output file
    pub fn output_suffix(&self) -> &'static str {
        match self {
            TransformKind::Bichrome { .. } => "_bichrome",
            TransformKind::Sketch { .. } => "_drawing",
        }
    }

    /// How the written file is described to the user
    pub fn saved_label(&self) -> &'static str {
        match self {
            TransformKind::Bichrome { .. } => "Bichrome transparent image",
            TransformKind::Sketch { .. } => "Sketch image",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Bichrome { .. } => "bichrome",
            TransformKind::Sketch { .. } => "sketch",
        }
    }

    /// Run the pixel transform on an already decoded image
    pub fn apply(&self, img: &DynamicImage) -> crate::error::Result<DynamicImage> {
        match self {
            TransformKind::Bichrome { accent, threshold } => {
                bichrome::to_bichrome(img, *accent, *threshold).map(DynamicImage::ImageRgba8)
            }
            TransformKind::Sketch { blur_size } => sketch::to_sketch(img, *blur_size),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StylizeConfig {
    pub transform: TransformKind,
    /// Explicit output path; derived from the input name when absent
    pub output_path: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
    pub verbose: bool,
}

#[derive(Debug)]
pub struct StylizeResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub dimensions: (u32, u32),
    /// False in dry-run mode
    pub written: bool,
    pub processing_time: Duration,
}

/// Loads one image, applies the configured transform and writes the result
pub struct StylizeEngine {
    config: StylizeConfig,
}

impl StylizeEngine {
    pub fn new(config: StylizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StylizeConfig {
        &self.config
    }

    /// Where the result for `input_path` is written
    pub fn output_path_for(&self, input_path: &Path) -> PathBuf {
        self.config
            .output_path
            .clone()
            .unwrap_or_else(|| create_output_path(input_path, self.config.transform.output_suffix()))
    }

    /// Process a single image file, reporting each stage as `(percent, message)`
    pub fn process<F>(&self, input_path: &Path, progress_callback: F) -> Result<StylizeResult>
    where
        F: Fn(u64, String),
    {
        let start = Instant::now();
        let verbose = self.config.verbose;
        let filename = input_path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("unknown");

        let output_path = self.output_path_for(input_path);
        if output_path.exists() && !self.config.force {
            return Err(anyhow::anyhow!(
                "Output file already exists: {} (use --force to overwrite)",
                output_path.display()
            ));
        }

        // Stage 1: Load image (10%)
        progress_callback(10, format!("{} - Loading", filename));
        let img = loader::load_image(input_path)?;
        let dimensions = (img.width(), img.height());

        verbose_println(
            verbose,
            &format!(
                "Decoded {}: {}x{} {:?}",
                input_path.display(),
                dimensions.0,
                dimensions.1,
                img.color()
            ),
        );

        // Stage 2: Transform (40%)
        progress_callback(
            40,
            format!("{} - Applying {}", filename, self.config.transform.name()),
        );
        let styled = self.config.transform.apply(&img)?;

        // Stage 3: Save (80%)
        let written = if self.config.dry_run {
            verbose_println(
                verbose,
                &format!("Dry run: skipping write of {}", output_path.display()),
            );
            false
        } else {
            progress_callback(80, format!("{} - Saving", filename));
            styled
                .save(&output_path)
                .with_context(|| format!("Failed to save image: {}", output_path.display()))?;
            true
        };

        progress_callback(100, format!("{} - Complete", filename));

        Ok(StylizeResult {
            input_path: input_path.to_path_buf(),
            output_path,
            dimensions,
            written,
            processing_time: start.elapsed(),
        })
    }
}
