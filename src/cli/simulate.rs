//! Simulate command implementation.
//!
//! Decodes RGB images, runs the deficiency filter, and writes the results.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::codec::{decode, encode_filtered};
use crate::discovery::collect_images;
use crate::error::{Result, VeilError};
use crate::output::{display_path, plural, Printer};
use crate::report::{FileReport, RunReport};
use crate::transform::apply_filter;
use crate::types::Deficiency;

/// Simulate colour-vision deficiency on RGB images
#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Input image files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Deficiency to simulate (red, green, blue, or none)
    #[arg(long, short)]
    pub deficiency: Deficiency,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Print a JSON run summary to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let printer = Printer::new();

    // Create output directory if needed
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| VeilError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let files = collect_images(&args.inputs);
    if files.is_empty() {
        printer.warning("Skipping", "no image files found in the given inputs");
        return Ok(());
    }

    let mut outputs = Vec::new();

    for file in &files {
        let (pixels, info) = decode(file)?;

        // The filter needs 3-channel input; grayscale files are skipped,
        // not failed, so a mixed directory still processes.
        let rgb = match pixels.as_rgb() {
            Ok(rgb) => rgb,
            Err(_) => {
                printer.warning(
                    "Skipping",
                    &format!(
                        "{} {}",
                        display_path(file),
                        printer.dim("(grayscale input)")
                    ),
                );
                continue;
            }
        };

        let filtered = apply_filter(rgb, args.deficiency);

        let out_path = output_path(&args.output, file, args.deficiency);
        encode_filtered(&filtered, info.size(), &out_path)?;

        printer.status(
            "Simulating",
            &format!(
                "{} ({}x{}, {}) -> {}",
                display_path(file),
                info.width,
                info.height,
                args.deficiency,
                display_path(&out_path)
            ),
        );

        outputs.push(FileReport {
            input: display_path(file),
            output: display_path(&out_path),
            width: info.width,
            height: info.height,
            mode: info.mode.to_string(),
        });
    }

    printer.success(
        "Finished",
        &format!(
            "{} written to {}",
            plural(outputs.len(), "image", "images"),
            display_path(&args.output)
        ),
    );

    if args.json {
        let report = RunReport {
            command: "simulate",
            deficiency: Some(args.deficiency.to_string()),
            outputs,
        };
        println!("{}", report.to_json_pretty()?);
    }

    Ok(())
}

/// Build the output path: `player.png` -> `<output>/player.red.png`.
fn output_path(output: &Path, input: &Path, deficiency: Deficiency) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png");
    output.join(format!("{}.{}.{}", stem, deficiency, ext))
}
