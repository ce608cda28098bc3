use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::Path;
use std::time::Instant;

use picture_stylizer::cli::Args;
use picture_stylizer::utils::{
    create_progress_bar, error_println, failure_message, format_duration, validate_input,
    verbose_println, warn_println,
};
use picture_stylizer::{JsonMessage, StylizeEngine, TransformKind};

fn main() {
    let mut args = Args::parse();

    if let Err(e) = run(&mut args) {
        report_failure(&args.input_path, &e, args.json_progress, args.verbose);
        std::process::exit(1);
    }
}

/// Print a failed run either as a JSON line or as styled terminal output
fn report_failure(input_path: &Path, err: &anyhow::Error, json_mode: bool, verbose: bool) {
    if json_mode {
        JsonMessage::from_failure(input_path, err).emit();
        return;
    }

    println!();
    error_println(&failure_message(err));
    verbose_println(verbose, &format!("Cause: {:#}", err));
}

fn run(args: &mut Args) -> Result<()> {
    let start_time = Instant::now();
    args.load_and_merge_config()?;

    let json_mode = args.json_progress;

    if !json_mode {
        println!("{}", style("Picture Stylizer").bold().blue());
        println!();
    }

    validate_input(&args.input_path)?;
    let config = args.resolve()?;

    if config.verbose {
        println!("{}", style("Configuration:").bold());
        println!("  Input: {}", args.input_path.display());
        match &config.transform {
            TransformKind::Bichrome { accent, threshold } => {
                println!("  Transform: bichrome");
                println!("  Accent color: {}", accent);
                println!("  Threshold: {}", threshold);
            }
            TransformKind::Sketch { blur_size } => {
                println!("  Transform: sketch");
                println!("  Blur size: {}x{}", blur_size.get(), blur_size.get());
                println!("  Blur sigma: {:.2}", blur_size.auto_sigma());
            }
        }
        println!("  Force overwrite: {}", config.force);
        if config.dry_run {
            println!("  Dry run mode: enabled (no file will be written)");
        }
        println!();
    }

    if let TransformKind::Bichrome { .. } = config.transform {
        let is_png = args
            .input_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png && !json_mode {
            warn_println("Bichrome conversion expects a transparent PNG image");
        }
    }

    let dry_run = config.dry_run;
    let saved_label = config.transform.saved_label();
    let engine = StylizeEngine::new(config);

    let progress = if json_mode {
        None
    } else {
        Some(create_progress_bar()?)
    };

    let result = engine.process(&args.input_path, |percent, message| match &progress {
        Some(pb) => {
            pb.set_position(percent);
            pb.set_message(message);
        }
        None => JsonMessage::progress(percent, message),
    });

    if let Some(pb) = &progress {
        match &result {
            Ok(_) => pb.finish_with_message("✓ Done"),
            Err(_) => pb.abandon_with_message("Failed"),
        }
    }
    let result = result?;

    if json_mode {
        JsonMessage::file_completed(
            &result.input_path,
            &result.output_path,
            result.written,
            result.processing_time.as_millis(),
        );
        return Ok(());
    }

    println!();
    if dry_run {
        println!(
            "{} would be saved as {}",
            saved_label,
            style(result.output_path.display()).cyan()
        );
    } else {
        println!(
            "{} saved as {}",
            saved_label,
            style(result.output_path.display()).bold().green()
        );
    }

    println!();
    println!("{}", style("Performance:").bold().blue());
    println!("  Image size: {}x{}", result.dimensions.0, result.dimensions.1);
    println!(
        "  Transform time: {}",
        style(format_duration(result.processing_time)).bold()
    );
    println!(
        "  Total time: {}",
        style(format_duration(start_time.elapsed())).dim()
    );

    Ok(())
}
