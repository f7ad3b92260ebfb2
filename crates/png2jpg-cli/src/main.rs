//! png2jpg - Batch-convert PNG images to JPEG
//!
//! Every FILE is decoded, re-encoded as JPEG at quality 95 and written next
//! to the input with the extension rewritten to `.jpg`. The first file that
//! cannot be converted aborts the whole batch.

use std::process::ExitCode;

use clap::Parser;
use png2jpg::{convert_batch, JpegOptions};

#[derive(Parser)]
#[command(name = "png2jpg")]
#[command(version)]
#[command(about = "Batch-convert PNG images to JPEG", long_about = None)]
struct Cli {
    /// PNG files to convert, processed left to right
    files: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let opts = JpegOptions::default();
    if let Err(err) = convert_batch(&cli.files, &opts) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
