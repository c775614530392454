use std::path::PathBuf;

use ascii_remap::{ConvertOptions, DecodePolicy, RemapError, convert, convert_file, logger};
use clap::Parser;

/// Rebuild a binary PNG from its printable-ASCII `.raw` encoding.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// ASCII-encoded input document.
    #[arg(default_value = "file.png.raw", env = "ASCII_REMAP_INPUT")]
    input: PathBuf,

    /// Binary output file, overwritten if it exists.
    #[arg(default_value = "file_recovered.png", env = "ASCII_REMAP_OUTPUT")]
    output: PathBuf,

    /// How to treat bytes that are not valid UTF-8.
    #[arg(long, value_enum, default_value_t = DecodePolicy::Skip)]
    on_decode_error: DecodePolicy,

    /// Print the conversion report as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn fail() -> ! {
    log::error!("Conversion failed!");
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::setup_logger(cli.verbose);

    // Plain runs with default options go through the boolean entry point.
    if !cli.json && cli.on_decode_error == DecodePolicy::default() {
        if !convert(&cli.input, &cli.output)? {
            fail();
        }
        log::info!(
            "If '{}' does not open, the encoding was lossy and the original mapping file is needed",
            cli.output.display()
        );
        return Ok(());
    }

    let options = ConvertOptions {
        on_decode_error: cli.on_decode_error,
        ..ConvertOptions::default()
    };

    match convert_file(&cli.input, &cli.output, &options) {
        Ok(report) => {
            log::info!("Conversion complete! Output file: {}", cli.output.display());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(())
        }
        Err(e @ RemapError::Format { .. }) => {
            log::error!("{e}");
            fail();
        }
        Err(e) => Err(e.into()),
    }
}
