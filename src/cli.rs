use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::image_processing::bichrome::DEFAULT_THRESHOLD;
use crate::image_processing::blur::BlurKernelSize;
use crate::image_processing::color::Color;
use crate::image_processing::{StylizeConfig, TransformKind};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformType {
    /// Black + accent color, keeps transparency (needs an alpha channel)
    #[value(name = "bichrome")]
    Bichrome,
    /// Pencil sketch via grayscale, blur and divide
    #[value(name = "sketch")]
    Sketch,
}

#[derive(Parser, Debug)]
#[command(
    name = "picture-stylizer",
    about = "Turn a picture into a transparent bichrome asset or a pencil sketch",
    long_about = "
Picture Stylizer

Applies one of two pixel transforms to a single image and writes the result
next to the input:

• bichrome: thresholds the image into black and an accent color while keeping
  the original alpha channel. Writes <name>_bichrome.<ext>.
• sketch: renders a pencil-style drawing (invert, blur, invert, divide).
  Writes <name>_drawing.<ext>.

Example Usage:
  # Transparent logo in black and green
  picture-stylizer -i logo.png -t bichrome --color \"#00FF00\"

  # Custom threshold
  picture-stylizer -i logo.png -t bichrome --color 255,128,0 --threshold 90

  # Pencil sketch with a softer blur
  picture-stylizer -i portrait.jpg -t sketch --blur-size 31

  # Settings from a JSON file, overridden on the command line
  picture-stylizer -i portrait.jpg --config stylizer.json --force"
)]
pub struct Args {
    /// Input image file
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_path: PathBuf,

    /// Output file (default: input name with _bichrome/_drawing appended)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Transform to apply: bichrome or sketch
    #[arg(short = 't', long = "type")]
    pub transform: Option<TransformType>,

    /// Accent color for bichrome (#RRGGBB, #RGB or R,G,B)
    #[arg(short = 'c', long = "color", value_name = "COLOR")]
    pub color: Option<String>,

    /// Luma threshold for bichrome (0-255, default 127). Equal values turn black
    #[arg(long = "threshold", value_name = "N")]
    pub threshold: Option<u8>,

    /// Blur kernel size for sketch (odd, 1-255, default 21)
    #[arg(long = "blur-size", value_name = "N")]
    pub blur_size: Option<u32>,

    /// JSON configuration file
    #[arg(long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(long = "force")]
    pub force: bool,

    /// Run the transform without writing any file
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Enable verbose output with detailed progress information
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Emit progress and results as JSON lines (for wrapping tools)
    #[arg(long = "json-progress")]
    pub json_progress: bool,
}

impl Args {
    /// Parse the accent color, if one was given
    pub fn accent_color(&self) -> Result<Option<Color>> {
        self.color
            .as_deref()
            .map(|text| text.parse::<Color>())
            .transpose()
            .context("Failed to parse accent color")
    }

    /// Validate the merged arguments and build the engine configuration
    pub fn resolve(&self) -> Result<StylizeConfig> {
        let transform_type = self.transform.ok_or_else(|| {
            anyhow::anyhow!("No transform specified. Use -t bichrome or -t sketch")
        })?;

        let transform = match transform_type {
            TransformType::Bichrome => {
                let accent = self.accent_color()?.ok_or_else(|| {
                    anyhow::anyhow!("No accent color specified. Use --color \"#RRGGBB\"")
                })?;
                TransformKind::Bichrome {
                    accent,
                    threshold: self.threshold.unwrap_or(DEFAULT_THRESHOLD),
                }
            }
            TransformType::Sketch => {
                let blur_size = match self.blur_size {
                    Some(size) => BlurKernelSize::new(size)?,
                    None => BlurKernelSize::default(),
                };
                TransformKind::Sketch { blur_size }
            }
        };

        Ok(StylizeConfig {
            transform,
            output_path: self.output_path.clone(),
            force: self.force,
            dry_run: self.dry_run,
            verbose: self.verbose && !self.json_progress,
        })
    }
}


// Default implementation for tests
#[cfg(test)]
impl Default for Args {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input.png"),
            output_path: None,
            transform: None,
            color: None,
            threshold: None,
            blur_size: None,
            config_file: None,
            force: false,
            dry_run: false,
            verbose: false,
            json_progress: false,
        }
    }
}
