use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::TransformError;

/// Extension used when the input file has none
const FALLBACK_EXTENSION: &str = "png";

/// Create a styled stage progress bar (0-100)
pub fn create_progress_bar() -> Result<ProgressBar> {
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.blue} [{elapsed_precise}] [{bar:30.cyan/blue}] {percent:>3}% {msg}",
        )?
        .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Format duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_secs >= 60 {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        format!("{}m {}s", mins, secs)
    } else if total_secs > 0 {
        format!("{}.{:03}s", total_secs, millis)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Validate the input path before any decoding happens
pub fn validate_input(input_path: &Path) -> Result<()> {
    if !input_path.exists() {
        return Err(anyhow::anyhow!(
            "Input file does not exist: {}",
            input_path.display()
        ));
    }
    if !input_path.is_file() {
        return Err(anyhow::anyhow!(
            "Input path is not a file: {}",
            input_path.display()
        ));
    }
    Ok(())
}

/// Derive the output path by appending `suffix` to the file stem
///
/// `photos/cat.png` with `_drawing` becomes `photos/cat_drawing.png`. Inputs
/// without an extension get `.png`.
pub fn create_output_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let extension = input_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(FALLBACK_EXTENSION);

    input_path.with_file_name(format!("{}{}.{}", stem, suffix, extension))
}

/// Headline for a failed run
///
/// Known transform errors get their user-facing text; anything else reports
/// the full context chain.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TransformError>() {
        Some(transform_error) => transform_error.user_message(),
        None => format!("{:#}", err),
    }
}

/// Print verbose information if verbose mode is enabled
pub fn verbose_println(verbose: bool, message: &str) {
    if verbose {
        println!("{} {}", style("[VERBOSE]").dim(), message);
    }
}

/// Print warning message
pub fn warn_println(message: &str) {
    println!("{} {}", style("[WARNING]").yellow().bold(), message);
}

/// Print error message
pub fn error_println(message: &str) {
    eprintln!("{} {}", style("[ERROR]").red().bold(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
        assert_eq!(format_duration(Duration::from_secs(1)), "1.000s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
    }

    #[test]
    fn test_create_output_path() {
        assert_eq!(
            create_output_path(Path::new("photos/cat.png"), "_bichrome"),
            PathBuf::from("photos/cat_bichrome.png")
        );
        assert_eq!(
            create_output_path(Path::new("/tmp/portrait.final.JPG"), "_drawing"),
            PathBuf::from("/tmp/portrait.final_drawing.JPG")
        );
        assert_eq!(
            create_output_path(Path::new("scan"), "_drawing"),
            PathBuf::from("scan_drawing.png")
        );
    }

    #[test]
    fn test_failure_message() {
        let err = anyhow::Error::from(TransformError::MissingAlphaChannel);
        assert!(failure_message(&err).contains("no transparency"));

        let err = anyhow::anyhow!("corrupt header").context("Unable to read the image cat.png");
        assert_eq!(
            failure_message(&err),
            "Unable to read the image cat.png: corrupt header"
        );
    }

    #[test]
    fn test_validate_input_missing() {
        let err = validate_input(Path::new("no/such/file.png")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
