use std::{fmt, sync::{Arc, OnceLock}};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

use super::{ArtifactSource, DiskArtifacts};
use crate::{common, model::load_model, ArtifactPaths, Config, CountyTable, HousingData, Regressor};

static CACHE: OnceLock<Arc<Artifacts>> = OnceLock::new();

/// The cleaned dataset, the geo dataset and the model, loaded together and
/// shared read-only.
pub struct Artifacts {
    housing: HousingData,
    counties: CountyTable,
    model: Arc<dyn Regressor>,
}

impl fmt::Debug for Artifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifacts")
            .field("housing", &self.housing)
            .field("counties", &self.counties.len())
            .finish_non_exhaustive()
    }
}

impl Artifacts {
    pub fn new(housing: HousingData, counties: CountyTable, model: Arc<dyn Regressor>) -> Result<Self> {
        if counties.is_empty() {
            bail!("[artifacts] geo dataset has no counties");
        }
        Ok(Self { housing, counties, model })
    }

    /// Load all three artifacts from `src`, checking configured digests.
    pub fn load(src: &dyn ArtifactSource, paths: &ArtifactPaths) -> Result<Self> {
        let housing = HousingData::from_parquet_bytes(&fetch(src, paths, &paths.cleaned)?)
            .with_context(|| format!("[artifacts] Failed to load cleaned dataset {}", paths.cleaned))?;
        let counties = CountyTable::from_geoparquet_bytes(&fetch(src, paths, &paths.geo)?)
            .with_context(|| format!("[artifacts] Failed to load geo dataset {}", paths.geo))?;
        let model = load_model(&fetch(src, paths, &paths.model)?)
            .with_context(|| format!("[artifacts] Failed to load model {}", paths.model))?;

        info!("[artifacts] loaded {} housing rows, {} counties, model {}",
            housing.rows(), counties.len(), paths.model);
        Self::new(housing, counties, Arc::from(model))
    }

    /// Load from the directory named by `paths.root`.
    pub fn from_disk(paths: &ArtifactPaths) -> Result<Self> {
        Self::load(&disk_source(paths)?, paths)
    }

    /// Process-wide instance, loaded from disk on first use. Later calls return
    /// the same instance whatever `config` they pass.
    pub fn cached(config: &Config) -> Result<Arc<Self>> {
        if let Some(artifacts) = CACHE.get() {
            return Ok(Arc::clone(artifacts));
        }
        let loaded = Arc::new(Self::from_disk(&config.artifacts)?);
        Ok(Arc::clone(CACHE.get_or_init(|| loaded)))
    }

    #[inline] pub fn housing(&self) -> &HousingData { &self.housing }

    #[inline] pub fn counties(&self) -> &CountyTable { &self.counties }

    #[inline] pub fn model(&self) -> &dyn Regressor { self.model.as_ref() }
}

/// The cleaned dataset and the model without the geo dataset, for predictions
/// on manually entered locations.
pub struct ModelArtifacts {
    housing: HousingData,
    model: Arc<dyn Regressor>,
}

impl fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("housing", &self.housing)
            .finish_non_exhaustive()
    }
}

impl ModelArtifacts {
    /// Load the cleaned dataset and the model from `src`; the geo dataset is
    /// never read.
    pub fn load(src: &dyn ArtifactSource, paths: &ArtifactPaths) -> Result<Self> {
        let housing = HousingData::from_parquet_bytes(&fetch(src, paths, &paths.cleaned)?)
            .with_context(|| format!("[artifacts] Failed to load cleaned dataset {}", paths.cleaned))?;
        let model = load_model(&fetch(src, paths, &paths.model)?)
            .with_context(|| format!("[artifacts] Failed to load model {}", paths.model))?;

        info!("[artifacts] loaded {} housing rows, model {} (no geo dataset)", housing.rows(), paths.model);
        Ok(Self { housing, model: Arc::from(model) })
    }

    pub fn from_disk(paths: &ArtifactPaths) -> Result<Self> {
        Self::load(&disk_source(paths)?, paths)
    }

    #[inline] pub fn housing(&self) -> &HousingData { &self.housing }

    #[inline] pub fn model(&self) -> &dyn Regressor { self.model.as_ref() }
}

fn disk_source(paths: &ArtifactPaths) -> Result<DiskArtifacts> {
    common::require_dir_exists(&paths.root)
        .context("[artifacts] artifact root is not available")?;
    Ok(DiskArtifacts::new(&paths.root))
}

fn fetch(src: &dyn ArtifactSource, paths: &ArtifactPaths, rel: &str) -> Result<Arc<[u8]>> {
    if !src.has(rel) {
        bail!("[artifacts] missing artifact {rel} under {}", paths.root.display());
    }
    let bytes = src.get(rel)?;

    if let Some(expected) = paths.checksums.get(rel) {
        common::verify_sha256(rel, &bytes, expected)?;
        debug!("[artifacts] checksum ok for {rel}");
    }
    Ok(bytes)
}
