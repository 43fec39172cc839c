//! radioimg: export the channels of radio .img files as CSV or JSON
//!
//! Single file:  radioimg radio.img [radio.csv]
//! Batch mode:   radioimg --all [--dir .] [--out-dir csv]

use clap::Parser;
use radioimg::convert::{convert_directory, convert_file, default_output_path, ConvertError};
use radioimg::{ConvertOutcome, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "radioimg", version, about = "Decode radio .img files into channel tables")]
struct Args {
    /// Image file to decode
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    img_file: Option<PathBuf>,

    /// Output file (defaults to the image path with the format's extension)
    #[arg(conflicts_with = "all")]
    output: Option<PathBuf>,

    /// Convert every .img file in --dir
    #[arg(long)]
    all: bool,

    /// Directory scanned in batch mode
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Output directory in batch mode
    #[arg(long, default_value = "csv")]
    out_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(ExitCode::from(usage_exit_status(&e)));
        }
    };

    if args.all {
        return run_batch(&args.dir, &args.out_dir, args.format);
    }

    // clap guarantees the image path outside batch mode
    let Some(img_file) = args.img_file else {
        anyhow::bail!("No image file given");
    };
    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&img_file, args.format));

    println!("Parsing {}...", img_file.display());
    let outcome = convert_file(&img_file, &output, args.format)?;
    report(&img_file, &output, outcome);

    Ok(ExitCode::SUCCESS)
}

fn run_batch(dir: &Path, out_dir: &Path, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let summary = match convert_directory(dir, out_dir, format) {
        Ok(summary) => summary,
        Err(ConvertError::NoImages(_)) => {
            eprintln!("No .img files found");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    for file in &summary.reports {
        println!("Processing {}...", file.input.display());
        match &file.result {
            Ok(outcome) => report(&file.input, &file.output, *outcome),
            Err(e) => println!("✗ Failed to parse {}: {}", file.input.display(), e),
        }
    }

    println!(
        "\n{} exported, {} without channels, {} failed",
        summary.exported(),
        summary.empty(),
        summary.failed()
    );

    Ok(ExitCode::SUCCESS)
}

/// Exit status for a rejected command line: 0 for --help/--version, 1 otherwise
fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

fn report(input: &Path, output: &Path, outcome: ConvertOutcome) {
    match outcome {
        ConvertOutcome::Exported(count) => {
            println!("✓ Exported {} channels to {}", count, output.display())
        }
        ConvertOutcome::NoChannels => {
            println!("No valid channels found");
            println!("✗ Failed to parse {}", input.display());
        }
    }
}

fn init_tracing() {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();
}
