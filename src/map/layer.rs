use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;

use crate::{common, CountyTable, Ring};

/// One county's normalized outline, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedLayer {
    pub name: String,
    /// Counter-clockwise exterior rings as `[lon, lat]` pairs.
    pub rings: Vec<Ring>,
}

/// Every county with its rings, in name order.
pub fn prepare_layers(counties: &CountyTable) -> Result<Vec<PreparedLayer>> {
    if !counties.has_geometry() {
        bail!("[map::layer] geo dataset has no geometry column");
    }

    Ok(counties.records().iter().enumerate()
        .map(|(i, record)| PreparedLayer {
            name: record.name.clone(),
            rings: counties.shape(i).map(<[Ring]>::to_vec).unwrap_or_default(),
        })
        .collect())
}

/// Write prepared layers as a JSON array.
pub fn write_layers_json(path: &Path, layers: &[PreparedLayer]) -> Result<()> {
    common::ensure_parent_dir(path)?;
    let file = File::create(path)
        .with_context(|| format!("[map::layer] Failed to create {}", path.display()))?;

    serde_json::to_writer(BufWriter::new(file), layers)
        .with_context(|| format!("[map::layer] Failed to write {}", path.display()))?;

    info!("[map::layer] wrote {} layers to {}", layers.len(), path.display());
    Ok(())
}
