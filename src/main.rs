//! svg2drawable CLI
//!
//! Usage:
//!   svg2drawable [OPTIONS] <INPUTS>... [-- <OUTPUTS>...]
//!
//! Options:
//!   --width <INT>    Baseline (mdpi) width in pixels
//!   --height <INT>   Baseline (mdpi) height in pixels
//!   --no-padding     Crop to the drawing bounds instead of the page
//!   -h, --help       Print help

use clap::Parser;

use svg2drawable::{expand_inputs, run_batch, BatchConfig, ExportArea};

#[derive(Parser)]
#[command(name = "svg2drawable")]
#[command(about = "Render Android drawable PNGs from SVG files at every density")]
struct Cli {
    /// Input SVG file(s); a single argument may be a glob pattern
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<String>,

    /// Output file names after `--`, one per input (or none at all)
    #[arg(last = true, value_name = "OUTPUT")]
    outputs: Vec<String>,

    /// Baseline (mdpi) width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: Option<u32>,

    /// Baseline (mdpi) height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: Option<u32>,

    /// Crop to the drawing bounds, removing surrounding whitespace
    #[arg(long, alias = "no_padding")]
    no_padding: bool,
}

fn main() {
    let cli = Cli::parse();

    let area = if cli.no_padding {
        ExportArea::Drawing
    } else {
        ExportArea::Page
    };
    let config = BatchConfig::new(expand_inputs(&cli.inputs))
        .with_outputs(cli.outputs)
        .with_width(cli.width)
        .with_height(cli.height)
        .with_area(area);

    // Reject bad arguments before any directory or render work happens
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match run_batch(&config) {
        Ok(report) => {
            if !report.failures.is_empty() {
                eprintln!(
                    "{} of {} renders failed",
                    report.failures.len(),
                    report.attempted
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
