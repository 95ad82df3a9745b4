use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use nnue_convert::nnue::{convert_file, Architecture, ConvertOptions};

#[derive(Parser, Debug)]
#[command(name = "nnue_convert")]
#[command(about = "Quantize JSON NNUE tensors into the engine's binary network files")]
struct Cli {
    /// JSON tensor file produced by the trainer
    json_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let arch = Architecture::default();
    let options = ConvertOptions::default();

    let report = convert_file(&cli.json_file, &arch, &options)
        .with_context(|| format!("converting {}", cli.json_file.display()))?;

    info!(
        "done: {} written, {} missing, {} ignored",
        report.written.len(),
        report.missing.len(),
        report.ignored.len()
    );
    Ok(())
}
