use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mr_remap_rs::image_pipeline::{derive_output_path, ConversionConfig, SpecularToMrPipeline};
use mr_remap_rs::logger;

use tracing::info;

/// Remap a specular-convention texture (`*_s.png`) into a metallic-roughness
/// texture (`*_mr.png`) next to it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input texture path.
    #[arg(value_name = "INPUT")]
    input: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init();

    let pipeline = SpecularToMrPipeline::new(ConversionConfig::default());

    let texture = pipeline
        .load_remapped(&args.input)
        .context("Failed to load texture")?;

    let output = derive_output_path(&args.input);
    println!("{}", output.display());

    pipeline
        .write_file(&texture, &output)
        .context("Failed to write metallic-roughness texture")?;

    info!(output = %output.display(), "Done");
    Ok(())
}
