use anyhow::Result;
use countyprice::{Artifacts, Config};

pub fn run(config: &Config) -> Result<()> {
    let artifacts = Artifacts::cached(config)?;
    for name in artifacts.counties().names() {
        println!("{name}");
    }
    Ok(())
}
