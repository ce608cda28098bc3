use crate::cli::{Args, TransformType};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Saved stylizer settings
///
/// ```json
/// { "transform": "bichrome", "accentColor": "#00FF00", "threshold": 127 }
/// ```
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub transform: Option<TransformType>,
    pub accent_color: Option<String>,
    pub threshold: Option<u8>,
    pub blur_size: Option<u32>,
    pub force: Option<bool>,
    pub verbose: Option<bool>,
}

impl ConfigFile {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Args {
    /// Load configuration from a JSON file and merge with command-line arguments
    /// Command-line arguments take precedence over config file values
    pub fn load_and_merge_config(&mut self) -> Result<()> {
        if let Some(config_path) = self.config_file.clone() {
            let config = ConfigFile::from_json_file(&config_path)?;
            self.merge_from_config(config);

            if self.verbose && !self.json_progress {
                eprintln!("Loaded configuration from: {}", config_path.display());
            }
        }
        Ok(())
    }

    /// Fill every option left unset on the command line from `config`
    pub fn merge_from_config(&mut self, config: ConfigFile) {
        self.transform = self.transform.or(config.transform);
        self.color = self.color.take().or(config.accent_color);
        self.threshold = self.threshold.or(config.threshold);
        self.blur_size = self.blur_size.or(config.blur_size);

        // Flags can only be switched on by the config file
        self.force |= config.force.unwrap_or(false);
        self.verbose |= config.verbose.unwrap_or(false);
    }
}
