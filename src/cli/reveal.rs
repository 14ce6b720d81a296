//! Reveal command implementation.
//!
//! Decodes images and extracts the bit planes where a hidden image lives.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::codec::{decode, encode};
use crate::discovery::collect_images;
use crate::error::{Result, VeilError};
use crate::output::{display_path, plural, Printer};
use crate::report::{FileReport, RunReport};
use crate::transform::reveal;

/// Extract images hidden in low-order pixel bits
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Input image files or directories
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Print a JSON run summary to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RevealArgs) -> Result<()> {
    let printer = Printer::new();

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
        let hidden = reveal(&pixels);

        let out_path = output_path(&args.output, file);
        encode(&hidden, info.size(), &out_path)?;

        printer.status(
            "Revealing",
            &format!(
                "{} ({}x{}, {}) -> {}",
                display_path(file),
                info.width,
                info.height,
                info.mode,
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
            command: "reveal",
            deficiency: None,
            outputs,
        };
        println!("{}", report.to_json_pretty()?);
    }

    Ok(())
}

/// Build the output path: `hidden1.bmp` -> `<output>/hidden1.revealed.bmp`.
fn output_path(output: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png");
    output.join(format!("{}.revealed.{}", stem, ext))
}
