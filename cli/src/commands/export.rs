use anyhow::Result;
use countyprice::{prepare_layers, write_layers_json, Artifacts, Config};

pub fn run(config: &Config, args: &crate::cli::ExportArgs) -> Result<()> {
    let artifacts = Artifacts::cached(config)?;
    let layers = prepare_layers(artifacts.counties())?;

    write_layers_json(&args.output, &layers)?;
    println!("[export] wrote {} counties to {}", layers.len(), args.output.display());
    Ok(())
}
