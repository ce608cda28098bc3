//! JSON-lines output for driving the tool from other programs
//!
//! When --json-progress flag is enabled, all progress and status information
//! is emitted as JSON lines to stdout, suppressing all other output.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TransformError;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonMessage {
    /// Stage progress update (0-100)
    Progress { percent: u64, message: String },
    /// File processing completed
    FileCompleted {
        input_path: String,
        output_path: String,
        written: bool,
        processing_time_ms: u128,
    },
    /// File processing failed
    FileFailed {
        input_path: String,
        error: String,
        /// Short, user-facing explanation when the failure is a known one
        user_message: Option<String>,
    },
}

impl JsonMessage {
    /// Emit JSON message to stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn progress(percent: u64, message: impl Into<String>) {
        Self::Progress {
            percent,
            message: message.into(),
        }
        .emit();
    }

    pub fn file_completed(
        input_path: &Path,
        output_path: &Path,
        written: bool,
        processing_time_ms: u128,
    ) {
        Self::FileCompleted {
            input_path: input_path.display().to_string(),
            output_path: output_path.display().to_string(),
            written,
            processing_time_ms,
        }
        .emit();
    }

    /// Build the failure line for `err`, attaching the user-facing text of
    /// known transform errors
    pub fn from_failure(input_path: &Path, err: &anyhow::Error) -> Self {
        Self::FileFailed {
            input_path: input_path.display().to_string(),
            error: format!("{:#}", err),
            user_message: err
                .downcast_ref::<TransformError>()
                .map(TransformError::user_message),
        }
    }
}
