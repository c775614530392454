use std::path::PathBuf;

use ascii_remap::{encode_file, logger};
use clap::Parser;

/// Encode a binary file as printable ASCII in the `.raw` layout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Binary input file.
    input: PathBuf,

    /// Output document. Defaults to `<INPUT>.raw`.
    output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::setup_logger(cli.verbose);

    if !cli.input.is_file() {
        anyhow::bail!("Input path '{}' is not a file", cli.input.display());
    }

    let output = cli.output.unwrap_or_else(|| {
        let mut name = cli.input.clone().into_os_string();
        name.push(".raw");
        PathBuf::from(name)
    });

    let stats = encode_file(&cli.input, &output)?;
    log::info!(
        "Encoded {} bytes to {} ({:.2}% rewritten)",
        stats.total_bytes,
        output.display(),
        stats.percentage()
    );
    Ok(())
}
